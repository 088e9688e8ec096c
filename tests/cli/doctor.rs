use crate::cli::support::{stdout_json, Sandbox};
use predicates::prelude::*;

#[test]
fn test_doctor_without_state_fails() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[XX] Source skills: missing"))
        .stdout(predicate::str::contains("[XX] Governance checker: missing"))
        .stdout(predicate::str::contains("[OK] Installed rules (optional): missing"))
        .stdout(predicate::str::contains("Result: 1/7 checks passed."));
}

#[test]
fn test_doctor_passes_after_user_setup() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd().arg("setup").assert().success();

    sb.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("[XX]").not())
        .stdout(predicate::str::contains("Result: 7/7 checks passed."));
}

#[test]
fn test_doctor_uses_persisted_scope() {
    let sb = Sandbox::new();
    sb.seed_source();

    // Project scope never installs, so installed dirs are not required
    sb.cmd()
        .args(["setup", "--scope", "project"])
        .assert()
        .success();

    sb.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Installed skills: missing"))
        .stdout(predicate::str::contains("Result: 7/7 checks passed."));
}

#[test]
fn test_doctor_reports_missing_installs() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[XX] Installed skills: missing"))
        .stdout(predicate::str::contains("[XX] Installed workflows: missing"))
        .stdout(predicate::str::contains("Result: 5/7 checks passed."));
}

#[test]
fn test_doctor_json() {
    let sb = Sandbox::new();
    sb.seed_source();
    sb.cmd()
        .args(["setup", "--scope", "project-local"])
        .assert()
        .success();

    let output = sb
        .cmd()
        .args(["doctor", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result = stdout_json(&output);
    assert_eq!(result["scope"], "project-local");
    assert_eq!(result["passed"], 7);
    assert_eq!(result["total"], 7);
    assert_eq!(result["checks"].as_array().unwrap().len(), 7);
    assert_eq!(result["checks"][0]["name"], "Source skills");
}
