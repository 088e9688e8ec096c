//! Doctor command - check source and installed directories
//!
//! Uses the persisted scope (default `user`) and the working directory as the
//! project root. Exits non-zero unless every check passes.

pub mod report;
pub mod types;

use std::path::PathBuf;

use crate::commands::dispatch::CommandContext;
use oma_core::config::{self, load_persisted_scope};
use oma_core::destinations::resolve_destinations;
use oma_core::error::{OmaError, Result};
use oma_core::paths::{SourceDirs, GOVERNANCE_CHECKER};
use oma_core::scope::Scope;
pub use types::{Check, DoctorResult};

/// Run every check for `scope`
pub fn run_checks(ctx: &CommandContext, scope: Scope) -> Result<DoctorResult> {
    let home = match scope {
        Scope::User => config::home_dir()?,
        Scope::ProjectLocal | Scope::Project => PathBuf::new(),
    };
    let source = ctx.source()?;
    let sources = SourceDirs::new(source);
    let dest = resolve_destinations(scope, ctx.root, None, &home);
    let installed_required = scope != Scope::Project;

    let checks = vec![
        Check::probe("Source skills", &sources.skills, true),
        Check::probe("Source workflows", &sources.workflows, true),
        Check::probe("Source rules", &sources.rules, true),
        Check::probe("Installed skills", &dest.skills, installed_required),
        Check::probe("Installed workflows", &dest.workflows, installed_required),
        Check::probe("Installed rules (optional)", &dest.rules, false),
        Check::probe("Governance checker", source.join(GOVERNANCE_CHECKER), true),
    ];

    Ok(DoctorResult::new(scope, source, checks))
}

/// Execute the doctor command
#[tracing::instrument(skip_all, fields(root = %ctx.root.display()))]
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let scope = load_persisted_scope(ctx.root).unwrap_or_default();
    let result = run_checks(ctx, scope)?;

    report::output_result(ctx.cli, &result)?;

    if result.healthy() {
        Ok(())
    } else {
        Err(OmaError::ChecksFailed {
            passed: result.passed,
            total: result.total,
        })
    }
}
