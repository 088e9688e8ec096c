use crate::cli::support::{oma, write, Sandbox};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_help_flag() {
    oma()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: oma"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("sync-metadata"));
}

#[test]
fn test_version_flag() {
    oma()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("oma"));
}

#[test]
fn test_no_command_prints_usage() {
    oma()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: oma"));
}

#[test]
fn test_unknown_command_exit_code_2() {
    oma()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn test_unknown_command_json_envelope() {
    let output = oma().args(["--format", "json", "frobnicate"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 2);
    assert_eq!(err["error"]["type"], "usage_error");
    assert_eq!(err["error"]["message"], "Unknown command: frobnicate");
}

#[test]
fn test_unknown_format_exit_code_2() {
    oma().args(["--format", "yaml", "doctor"]).assert().code(2);
}

#[test]
fn test_conflicting_flags_json_envelope() {
    let output = oma()
        .args(["--format", "json", "catalog", "--verify", "--dry-run"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_flag_json_envelope() {
    let output = oma().args(["--format=json", "doctor", "--bogus"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 2);
}

#[test]
fn test_verify_runs_script() {
    let sb = Sandbox::new();
    write(
        &sb.source.join("scripts/verify-repo.sh"),
        "echo verified-ok\nexit 0\n",
    );

    sb.cmd()
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("verified-ok"));
}

#[test]
fn test_verify_propagates_failure() {
    let sb = Sandbox::new();
    write(&sb.source.join("scripts/verify-repo.sh"), "exit 4\n");

    sb.cmd()
        .arg("verify")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exited with status 4"));
}

#[test]
fn test_verify_missing_script() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("verify")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("verification script not found"));
}
