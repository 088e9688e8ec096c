use crate::cli::support::{stdout_json, write, Sandbox};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[test]
fn test_catalog_writes_manifest_and_public_catalog() {
    let sb = Sandbox::new();
    sb.seed_catalog_source();
    write(&sb.source.join(".agent/skills/extra/SKILL.md"), "# extra");

    sb.cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog generated: 8 skills, 7 workflows"));

    let manifest: Value =
        serde_json::from_str(&sb.read(&sb.source.join(".governance/catalog-manifest.json")))
            .unwrap();
    assert_eq!(manifest["schemaVersion"], 1);
    assert_eq!(manifest["skills"].as_array().unwrap().len(), 8);
    assert_eq!(manifest["workflows"].as_array().unwrap().len(), 7);

    let public: Value =
        serde_json::from_str(&sb.read(&sb.source.join("docs/generated/public-catalog.json")))
            .unwrap();
    assert_eq!(public["counts"]["skillCount"], 8);
    assert_eq!(public["counts"]["activeWorkflowCount"], 7);
    assert!(public["generatedAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_catalog_verify_detects_drift() {
    let sb = Sandbox::new();
    sb.seed_catalog_source();

    sb.cmd().arg("catalog").assert().success();
    sb.cmd()
        .args(["catalog", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog verified: 7 skills, 7 workflows"));

    write(&sb.source.join(".agent/workflows/new-flow.md"), "# new");
    sb.cmd()
        .args(["catalog", "--verify"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of sync. Run: oma catalog"));
}

#[test]
fn test_catalog_dry_run() {
    let sb = Sandbox::new();
    sb.seed_catalog_source();

    sb.cmd()
        .args(["catalog", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog preview: 7 skills, 7 workflows"));

    assert!(!sb.source.join(".governance").exists());
    assert!(!sb.source.join("docs").exists());
}

#[test]
fn test_catalog_missing_core_entry_is_data_error() {
    let sb = Sandbox::new();
    sb.seed_catalog_source();
    fs::remove_dir_all(sb.source.join(".agent/skills/autopilot")).unwrap();

    sb.cmd()
        .arg("catalog")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "catalog manifest invalid: missing_core_skill:autopilot",
        ));
}

#[test]
fn test_catalog_json_outcome() {
    let sb = Sandbox::new();
    sb.seed_catalog_source();

    let output = sb
        .cmd()
        .args(["--format", "json", "catalog", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcome = stdout_json(&output);
    assert_eq!(outcome["counts"]["skillCount"], 7);
    assert_eq!(outcome["counts"]["workflowCount"], 7);
}

#[test]
fn test_catalog_error_as_json() {
    let sb = Sandbox::new();

    let output = sb
        .cmd()
        .args(["--format", "json", "catalog"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "manifest_invalid");
    assert_eq!(err["error"]["field"], "missing_core_skill:autopilot");
}
