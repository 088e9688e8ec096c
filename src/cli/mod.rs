//! CLI argument parsing for oma
//!
//! Supports global flags: --root, --source, --format, --quiet, --verbose

pub mod format;
pub mod output;
pub mod paths;

use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use oma_core::config::SOURCE_DIR_ENV_VAR;
pub use output::OutputFormat;

/// oma - install and sync agent skills, workflows and rules
#[derive(Parser, Debug)]
#[command(name = "oma")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(allow_external_subcommands = true)]
pub struct Cli {
    /// Working directory (scope record, project destinations)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Source repository holding `.agent/{skills,workflows,rules}`
    #[arg(long, global = true, env = SOURCE_DIR_ENV_VAR)]
    pub source: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Per-link output during setup and debug-level logs
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skills, workflows and rules for a scope
    Setup(SetupArgs),

    /// Check source and installed directories
    Doctor,

    /// Generate the catalog manifest and public catalog
    Catalog {
        /// Fail if the generated files are stale
        #[arg(long, conflicts_with = "dry_run")]
        verify: bool,

        /// Report counts without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Sync skill/workflow counts and version into documentation
    SyncMetadata {
        /// Fail if any documentation file is stale
        #[arg(long, conflicts_with = "dry_run")]
        verify: bool,

        /// Report changes without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the repository verification script
    Verify,

    #[command(external_subcommand)]
    External(Vec<OsString>),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SetupArgs {
    /// Install scope: user, project-local, or project
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub scope: Option<String>,

    /// Project root for project scopes (default: working directory)
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub target: Option<String>,

    /// Overwrite existing files and replace non-symlink link paths
    #[arg(long)]
    pub force: bool,

    /// Report what would happen without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Skip copying skills
    #[arg(long)]
    pub no_skills: bool,

    /// Skip copying workflows
    #[arg(long)]
    pub no_workflows: bool,

    /// Skip copying rules
    #[arg(long)]
    pub no_rules: bool,

    /// Skip compatibility links
    #[arg(long)]
    pub no_links: bool,
}
