//! Persisted setup state and environment overrides
//!
//! The last-used scope is stored per working directory in
//! `.oma/setup-scope.json` so repeated `setup`/`doctor` runs agree.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OmaError, Result};
use crate::scope::Scope;

pub const STATE_DIR: &str = ".oma";
pub const SCOPE_FILE: &str = "setup-scope.json";

/// Overrides the home directory used for `user` scope destinations
pub const HOME_DIR_ENV_VAR: &str = "OMA_HOME";
/// Overrides the source repository root
pub const SOURCE_DIR_ENV_VAR: &str = "OMA_SOURCE";

/// On-disk record of the last scope used in a working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRecord {
    pub scope: Scope,
}

/// Path of the persisted scope record for `working_dir`
pub fn scope_record_path(working_dir: &Path) -> PathBuf {
    working_dir.join(STATE_DIR).join(SCOPE_FILE)
}

/// Read the persisted scope, if any.
///
/// Missing, unreadable, or malformed records all yield `None`; a bad record
/// must never block setup.
pub fn load_persisted_scope(working_dir: &Path) -> Option<Scope> {
    let path = scope_record_path(working_dir);
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable scope record");
            return None;
        }
    };

    match serde_json::from_str::<ScopeRecord>(&content) {
        Ok(record) => Some(record.scope),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring malformed scope record");
            None
        }
    }
}

/// Write the scope record. No-op under dry-run.
pub fn persist_scope(working_dir: &Path, scope: Scope, dry_run: bool) -> Result<()> {
    if dry_run {
        return Ok(());
    }

    let path = scope_record_path(working_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(&ScopeRecord { scope })?;
    content.push('\n');
    fs::write(&path, content)?;

    debug!(path = %path.display(), %scope, "persisted scope");
    Ok(())
}

/// Home directory for `user` scope installs, honoring `OMA_HOME`
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_DIR_ENV_VAR) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::home_dir()
        .ok_or_else(|| OmaError::Other("unable to determine home directory".to_string()))
}
