//! Command dispatch logic for oma

use std::time::Instant;

use crate::cli::paths::{resolve_root_path, resolve_source_root};
use crate::cli::{Cli, Commands};
use crate::commands;
use oma_core::bail_usage;
use oma_core::catalog::SyncMode;
use oma_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());
    let source = resolve_source_root(cli.source.as_deref(), &root);

    debug!(
        elapsed = ?start.elapsed(),
        root = %root.display(),
        source = ?source,
        "resolve_paths"
    );

    let ctx = CommandContext::new(cli, &root, source, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

fn sync_mode(verify: bool, dry_run: bool) -> SyncMode {
    if verify {
        SyncMode::Verify
    } else if dry_run {
        SyncMode::DryRun
    } else {
        SyncMode::Write
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Setup(args) => commands::setup::execute(ctx, args),
            Commands::Doctor => commands::doctor::execute(ctx),
            Commands::Catalog { verify, dry_run } => {
                commands::catalog::execute(ctx, sync_mode(*verify, *dry_run))
            }
            Commands::SyncMetadata { verify, dry_run } => {
                commands::metadata::execute(ctx, sync_mode(*verify, *dry_run))
            }
            Commands::Verify => commands::verify::execute(ctx),
            Commands::External(args) => {
                let name = args
                    .first()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                bail_usage!(format!("Unknown command: {name}"));
            }
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
