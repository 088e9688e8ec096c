//! `oma setup` - install assets and compatibility links for a scope
//!
//! Steps run in a fixed order and stop at the first error. Human output is
//! printed as each step finishes; JSON output is one report at the end.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::cli::format::print_json;
use crate::cli::{OutputFormat, SetupArgs};
use crate::commands::dispatch::CommandContext;
use oma_core::config::{self, load_persisted_scope, persist_scope};
use oma_core::destinations::{resolve_destinations, DestinationSet};
use oma_core::error::{OmaError, Result};
use oma_core::install::{AssetKind, InstallOptions, Installer, LinkOutcome, LinkReport, StepOutcome};
use oma_core::paths::resolve_lexical;
use oma_core::scope::{resolve_scope, Scope};

const TOTAL_STEPS: usize = 4;

/// One finished step, as reported in JSON output
#[derive(Debug, Serialize)]
struct StepReport {
    step: &'static str,
    #[serde(flatten)]
    outcome: StepOutcome,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetupReport {
    scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<PathBuf>,
    dry_run: bool,
    destinations: DestinationSet,
    steps: Vec<StepReport>,
}

/// Flag value, or a missing-value error when the flag was given bare
fn flag_value<'a>(flag: &str, value: Option<&'a str>) -> Result<Option<&'a str>> {
    match value {
        Some("") => Err(OmaError::missing_flag_value(flag)),
        other => Ok(other),
    }
}

fn install_options(args: &SetupArgs, verbose: bool) -> InstallOptions {
    InstallOptions {
        force: args.force,
        dry_run: args.dry_run,
        verbose,
        install_skills: !args.no_skills,
        install_workflows: !args.no_workflows,
        install_rules: !args.no_rules,
        install_links: !args.no_links,
    }
}

/// Execute the setup command
pub fn execute(ctx: &CommandContext, args: &SetupArgs) -> Result<()> {
    let explicit = flag_value("--scope", args.scope.as_deref())?;
    let target = flag_value("--target", args.target.as_deref())?
        .map(|t| resolve_lexical(ctx.root, Path::new(t)));

    let scope = resolve_scope(explicit, load_persisted_scope(ctx.root), Scope::User)?;
    let sources = ctx.source_dirs()?;
    let options = install_options(args, ctx.cli.verbose);

    let home = match scope {
        Scope::User => config::home_dir()?,
        Scope::ProjectLocal | Scope::Project => PathBuf::new(),
    };
    let destinations = resolve_destinations(scope, ctx.root, target.as_deref(), &home);
    persist_scope(ctx.root, scope, options.dry_run)?;
    debug!(%scope, dry_run = options.dry_run, "setup resolved");

    let human = ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet;
    if human {
        println!("oma setup");
        println!("=========");
        println!("Scope: {scope}");
        if let Some(target) = &target {
            println!("Target: {}", target.display());
        }
    }

    let installer = Installer::new(scope, &sources, &destinations, &options);
    let mut steps = Vec::with_capacity(TOTAL_STEPS);

    for (index, kind) in AssetKind::ALL.into_iter().enumerate() {
        if human {
            println!("[{}/{TOTAL_STEPS}] Installing {}...", index + 1, kind.as_str());
        }
        let outcome = installer.install_assets(kind)?;
        if human {
            print_copy_outcome(&outcome, options.dry_run);
        }
        steps.push(StepReport {
            step: kind.as_str(),
            outcome,
        });
    }

    if human {
        println!("[{TOTAL_STEPS}/{TOTAL_STEPS}] Writing compatibility links...");
    }
    let outcome = installer.install_links()?;
    if human {
        print_link_outcome(&outcome, options.verbose);
    }
    steps.push(StepReport {
        step: "links",
        outcome,
    });

    match ctx.cli.format {
        OutputFormat::Json => print_json(&SetupReport {
            scope,
            target,
            dry_run: options.dry_run,
            destinations,
            steps,
        }),
        OutputFormat::Human => {
            if human {
                println!("\nDone.");
            }
            Ok(())
        }
    }
}

fn print_copy_outcome(outcome: &StepOutcome, dry_run: bool) {
    match outcome {
        StepOutcome::Copied { files, destination } => {
            let verb = if dry_run {
                "Would install/update"
            } else {
                "Installed/updated"
            };
            println!("  {verb} {files} files -> {}", destination.display());
        }
        StepOutcome::Skipped | StepOutcome::Linked { .. } => println!("  Skipped"),
    }
}

fn print_link_outcome(outcome: &StepOutcome, verbose: bool) {
    let StepOutcome::Linked { links } = outcome else {
        println!("  Skipped");
        return;
    };

    let mut has_project_link = false;
    for link in links {
        if link.project {
            has_project_link = true;
            print_link(link);
        } else if verbose {
            print_link(link);
        }
    }

    if !has_project_link {
        println!("  Global compatibility links updated");
    }
}

fn print_link(link: &LinkReport) {
    if link.outcome == LinkOutcome::Preserved {
        println!(
            "  Kept {} (not a symlink, use --force to replace)",
            link.link.display()
        );
    } else {
        println!("  Linked {} -> {}", link.link.display(), link.target.display());
    }
}
