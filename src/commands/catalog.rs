//! `oma catalog` - generate, verify, or preview the skill/workflow catalog

use chrono::Utc;

use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use oma_core::catalog::{sync_catalog, SyncMode};
use oma_core::error::Result;

/// Execute the catalog command
pub fn execute(ctx: &CommandContext, mode: SyncMode) -> Result<()> {
    let outcome = sync_catalog(ctx.source()?, mode, Utc::now())?;
    let counts = outcome.counts;

    output_by_format!(ctx.cli.format,
        json => print_json(&outcome),
        human => {
            let label = match mode {
                SyncMode::DryRun => "preview",
                SyncMode::Verify => "verified",
                SyncMode::Write => "generated",
            };
            if mode == SyncMode::DryRun || !ctx.cli.quiet {
                println!(
                    "Catalog {label}: {} skills, {} workflows",
                    counts.skill_count, counts.workflow_count
                );
            }
            if mode == SyncMode::Write && ctx.cli.verbose {
                println!("  {}", outcome.manifest_path.display());
                println!("  {}", outcome.public_path.display());
            }
        }
    )
}
