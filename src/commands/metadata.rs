//! `oma sync-metadata` - keep documentation counts and version current

use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use oma_core::catalog::SyncMode;
use oma_core::error::Result;
use oma_core::metadata::sync_metadata;

/// Execute the sync-metadata command
pub fn execute(ctx: &CommandContext, mode: SyncMode) -> Result<()> {
    let outcome = sync_metadata(ctx.source()?, mode)?;
    let facts = &outcome.facts;

    output_by_format!(ctx.cli.format,
        json => print_json(&outcome),
        human => {
            let (changed, missing) = (outcome.changed, outcome.missing);
            match mode {
                SyncMode::Write => println!(
                    "Metadata synced: {changed} file(s) updated, {missing} missing target(s)"
                ),
                SyncMode::DryRun => println!(
                    "Metadata dry-run: {changed} file(s) would change, {missing} missing target(s)"
                ),
                SyncMode::Verify => {
                    if !ctx.cli.quiet {
                        println!(
                            "Metadata verified (skills={}, workflows={}, version={})",
                            facts.skills, facts.workflows, facts.version
                        );
                    }
                }
            }
        }
    )
}
