//! oma - install and sync agent skills, workflows and rules
//!
//! Copies assets from a source repository into user or project agent
//! directories and keeps the repository's generated catalog and
//! documentation counts in sync.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use oma_core::error::{ExitCode as OmaExitCode, OmaError};
use oma_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => OmaExitCode::Success,
        Err(e) => {
            report(&cli, &e);
            e.exit_code()
        }
    };
    ExitCode::from(code as u8)
}

fn report(cli: &Cli, err: &OmaError) {
    match (cli.format, err) {
        (OutputFormat::Json, _) => eprintln!("{}", err.to_json()),
        // doctor has already printed its checklist
        (OutputFormat::Human, OmaError::ChecksFailed { .. }) => {}
        (OutputFormat::Human, _) => eprintln!("{err}"),
    }
}

/// `Cli.format` is unknown when clap fails, so a JSON request is read from argv.
/// Help, version and anything else clap reports keep clap's own output.
fn parse_failure(err: clap::Error) -> ExitCode {
    let usage = matches!(
        err.kind(),
        ErrorKind::InvalidValue | ErrorKind::UnknownArgument | ErrorKind::ArgumentConflict
    );
    if !usage || !wants_json(env::args()) {
        err.exit();
    }

    let error = OmaError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn wants_json(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().any(|arg| arg == "--format=json")
        || args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
}
