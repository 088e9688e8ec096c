//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::CommandFactory;

use crate::cli::Cli;
use oma_core::error::{OmaError, Result};
use oma_core::paths::SourceDirs;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    /// Working directory: scope record and default project root
    pub root: &'a Path,
    source: Option<PathBuf>,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, source: Option<PathBuf>, start: Instant) -> Self {
        Self {
            cli,
            root,
            source,
            start,
        }
    }

    /// Source repository root; only commands that read it fail without one
    pub fn source(&self) -> Result<&Path> {
        self.source
            .as_deref()
            .ok_or_else(|| OmaError::not_found("source repository", self.root))
    }

    pub fn source_dirs(&self) -> Result<SourceDirs> {
        Ok(SourceDirs::new(self.source()?))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: print usage
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        Cli::command().print_help()?;
        println!();
        Ok(())
    }
}
