//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

use oma_core::paths::AGENT_DIR;

/// Resolve the working directory: explicit `--root`, else the current
/// directory, else ".".
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve the source repository root.
///
/// An explicit `--source` (or `OMA_SOURCE`) wins and is taken relative to
/// `working_dir`. Otherwise the nearest ancestor of the running executable
/// that holds an `.agent` directory is used. `None` when neither exists.
pub fn resolve_source_root(source: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(source) = source {
        return Some(if source.is_absolute() {
            source.to_path_buf()
        } else {
            working_dir.join(source)
        });
    }

    env::current_exe()
        .ok()
        .and_then(|exe| find_agent_root(&exe))
}

fn find_agent_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .skip(1)
        .find(|dir| dir.join(AGENT_DIR).is_dir())
        .map(Path::to_path_buf)
}
