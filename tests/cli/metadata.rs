use crate::cli::support::{write, Sandbox};
use predicates::prelude::*;

#[test]
fn test_sync_metadata_rewrites_counts() {
    let sb = Sandbox::new();
    sb.seed_source();
    write(&sb.source.join("CHANGELOG.md"), "# Changelog\n\n## [3.1.0] - 2026-02-01\n");
    write(
        &sb.source.join("README.md"),
        "**1 specialized Skills** and **1 automated Workflows**\n",
    );
    write(&sb.source.join("AGENTS.md"), "**Version:** 0.9.0\n");

    sb.cmd()
        .args(["sync-metadata", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Metadata dry-run: 2 file(s) would change, 4 missing target(s)",
        ));
    assert!(sb.read(&sb.source.join("README.md")).contains("**1 specialized"));

    sb.cmd()
        .arg("sync-metadata")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Metadata synced: 2 file(s) updated, 4 missing target(s)",
        ));

    assert_eq!(
        sb.read(&sb.source.join("README.md")),
        "**2 specialized Skills** and **3 automated Workflows**\n"
    );
    assert_eq!(sb.read(&sb.source.join("AGENTS.md")), "**Version:** 3.1.0\n");

    sb.cmd()
        .args(["sync-metadata", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Metadata verified (skills=2, workflows=3, version=3.1.0)",
        ));
}

#[test]
fn test_sync_metadata_verify_fails_when_stale() {
    let sb = Sandbox::new();
    sb.seed_source();
    write(
        &sb.source.join("docs/SKILL_GOVERNANCE_REPORT.md"),
        "- Skills total: 40\n",
    );

    sb.cmd()
        .args(["sync-metadata", "--verify"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Run: oma sync-metadata"));
}
