use crate::cli::support::{stdout_json, write, Sandbox};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_project_local_dry_run_reports_without_mutation() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .args(["setup", "--scope", "project-local", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scope: project-local"))
        .stdout(predicate::str::contains("[1/4] Installing skills..."))
        .stdout(predicate::str::contains("Would install/update 2 files"))
        .stdout(predicate::str::contains("Would install/update 3 files"))
        .stdout(predicate::str::contains("Would install/update 1 files"))
        .stdout(predicate::str::contains("Done."));

    assert!(!sb.work.join(".agent").exists());
    assert!(!sb.work.join(".antigravity").exists());
    assert!(!sb.work.join(".oma").exists());
}

#[test]
fn test_project_local_install_and_rerun() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .args(["setup", "--scope", "project-local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed/updated 2 files"))
        .stdout(predicate::str::contains("Linked"))
        .stdout(predicate::str::contains(".antigravity -> .agent"));

    assert_eq!(sb.read(&sb.work.join(".agent/skills/plan/SKILL.md")), "# plan");
    assert_eq!(sb.read(&sb.work.join(".agent/rules/style.md")), "# rule");
    assert_eq!(
        fs::read_link(sb.work.join(".antigravity")).unwrap(),
        Path::new(".agent")
    );
    assert_eq!(
        sb.read(&sb.work.join(".oma/setup-scope.json")),
        "{\n  \"scope\": \"project-local\"\n}\n"
    );

    // Second run copies nothing and still links
    sb.cmd()
        .args(["setup", "--scope", "project-local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed/updated 0 files"))
        .stdout(predicate::str::contains("Installed/updated 2 files").not());
}

#[test]
fn test_persisted_scope_is_reused() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .args(["setup", "--scope", "project-local"])
        .assert()
        .success();

    sb.cmd()
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scope: project-local"));
}

#[test]
fn test_existing_files_kept_unless_forced() {
    let sb = Sandbox::new();
    sb.seed_source();
    write(&sb.work.join(".agent/skills/plan/SKILL.md"), "local edits");

    sb.cmd()
        .args(["setup", "--scope", "project-local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed/updated 1 files"));
    assert_eq!(sb.read(&sb.work.join(".agent/skills/plan/SKILL.md")), "local edits");

    sb.cmd()
        .args(["setup", "--scope", "project-local", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed/updated 2 files"));
    assert_eq!(sb.read(&sb.work.join(".agent/skills/plan/SKILL.md")), "# plan");
}

#[test]
fn test_project_scope_skips_every_step() {
    let sb = Sandbox::new();
    sb.seed_source();

    let output = sb
        .cmd()
        .args(["setup", "--scope", "project"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("  Skipped").count(), 4);
    assert!(!sb.work.join(".agent").exists());
    assert!(sb.read(&sb.work.join(".oma/setup-scope.json")).contains("\"project\""));
}

#[test]
fn test_user_scope_installs_into_home() {
    let sb = Sandbox::new();
    sb.seed_source();

    let output = sb.cmd().args(["setup", "--verbose"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Scope: user"));
    assert_eq!(stdout.matches("  Linked ").count(), 5);
    assert!(stdout.contains("Global compatibility links updated"));

    let base = sb.home.join(".gemini/antigravity");
    assert!(base.join("skills/help/SKILL.md").exists());
    assert!(base.join("global_workflows/plan.md").exists());
    assert!(base.join("rules/style.md").exists());
    for link in [".agent", ".agents", "_agent", "_agents"] {
        assert!(sb.home.join(link).join("workflows/autopilot.md").exists());
    }
    assert!(base.join("workflows/help.md").exists());
}

#[test]
fn test_user_scope_without_verbose_hides_link_lines() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("  Linked ").not())
        .stdout(predicate::str::contains("Global compatibility links updated"));
}

#[test]
fn test_opt_out_flags() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .args([
            "setup",
            "--scope",
            "project-local",
            "--no-skills",
            "--no-rules",
            "--no-links",
        ])
        .assert()
        .success();

    assert!(!sb.work.join(".agent/skills").exists());
    assert!(!sb.work.join(".agent/rules").exists());
    assert!(sb.work.join(".agent/workflows/plan.md").exists());
    assert!(fs::symlink_metadata(sb.work.join(".antigravity")).is_err());
}

#[test]
fn test_target_overrides_project_root() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .args(["setup", "--scope", "project-local", "--target", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target: "));

    assert!(sb.work.join("app/.agent/workflows/help.md").exists());
    // The scope record stays with the working directory
    assert!(sb.work.join(".oma/setup-scope.json").exists());
}

#[test]
fn test_invalid_scope_is_usage_error() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["setup", "--scope", "global"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Invalid scope: global. Expected user, project-local, or project.",
        ));

    assert!(!sb.work.join(".oma").exists());
}

#[test]
fn test_missing_scope_value_is_usage_error() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["setup", "--scope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing value for --scope"));
}

#[test]
fn test_missing_target_value_is_usage_error() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["setup", "--target", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing value for --target"));
}

#[test]
fn test_json_report() {
    let sb = Sandbox::new();
    sb.seed_source();

    let output = sb
        .cmd()
        .args(["--format", "json", "setup", "--scope", "project-local", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["scope"], "project-local");
    assert_eq!(report["dryRun"], true);

    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["step"], "skills");
    assert_eq!(steps[0]["status"], "copied");
    assert_eq!(steps[0]["files"], 2);
    assert_eq!(steps[3]["step"], "links");
    assert_eq!(steps[3]["links"][0]["outcome"], "dryrun");
}

#[test]
fn test_forced_setup_from_own_agent_dir_keeps_content() {
    let sb = Sandbox::new();
    write(&sb.work.join(".agent/skills/plan/SKILL.md"), "# plan body");
    write(&sb.work.join(".agent/workflows/plan.md"), "# plan flow");

    sb.cmd()
        .env("OMA_SOURCE", &sb.work)
        .args(["setup", "--scope", "project-local", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed/updated 0 files"));

    assert_eq!(sb.read(&sb.work.join(".agent/skills/plan/SKILL.md")), "# plan body");
    assert_eq!(sb.read(&sb.work.join(".agent/workflows/plan.md")), "# plan flow");
}

#[test]
fn test_missing_source_fails_without_mutation() {
    let sb = Sandbox::new();
    write(&sb.work.join(".agent/skills/plan/SKILL.md"), "# plan body");

    sb.cmd()
        .env_remove("OMA_SOURCE")
        .args(["setup", "--scope", "project-local", "--force"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("source repository not found"));

    assert_eq!(sb.read(&sb.work.join(".agent/skills/plan/SKILL.md")), "# plan body");
    assert!(!sb.work.join(".oma").exists());
    assert!(!sb.work.join(".antigravity").exists());
}

#[test]
fn test_quiet_setup_prints_nothing() {
    let sb = Sandbox::new();
    sb.seed_source();

    sb.cmd()
        .args(["--quiet", "setup", "--scope", "project-local"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(sb.read(&sb.work.join(".agent/skills/plan/SKILL.md")), "# plan");
}
