//! `oma verify` - run the repository verification script

use std::process::Command;

use tracing::debug;

use crate::commands::dispatch::CommandContext;
use oma_core::error::{OmaError, Result};
use oma_core::paths::VERIFY_SCRIPT;

/// Run `bash <source>/scripts/verify-repo.sh` with inherited stdio
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let script = ctx.source()?.join(VERIFY_SCRIPT);
    if !script.is_file() {
        return Err(OmaError::not_found("verification script", script));
    }

    debug!(script = %script.display(), "running verification");
    let status = Command::new("bash").arg(&script).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(OmaError::CommandFailed {
            command: VERIFY_SCRIPT.to_string(),
            status: status.code().unwrap_or(1),
        })
    }
}
