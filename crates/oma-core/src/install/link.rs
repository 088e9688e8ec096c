//! Compatibility symlink maintenance

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::InstallOptions;
use crate::error::Result;

/// What `sync_link` did at the link path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkOutcome {
    /// Nothing was there; a new link was created
    Created,
    /// An existing symlink was recreated
    Refreshed,
    /// A real file or directory was removed (forced) and replaced
    Replaced,
    /// A real file or directory occupies the path and was left alone
    Preserved,
    /// Dry-run; nothing touched
    DryRun,
}

/// Make `link_path` a symlink to `target`.
///
/// Existing symlinks are always recreated. A non-symlink occupant is only
/// removed when `force` is set. Cleanup failures are ignored; the final link
/// creation reports any real problem.
#[tracing::instrument(
    skip_all,
    fields(target = %target.display(), link = %link_path.display(), force = options.force)
)]
pub fn sync_link(target: &Path, link_path: &Path, options: &InstallOptions) -> Result<LinkOutcome> {
    if options.dry_run {
        return Ok(LinkOutcome::DryRun);
    }

    let outcome = match fs::symlink_metadata(link_path) {
        Err(_) => LinkOutcome::Created,
        Ok(meta) if meta.file_type().is_symlink() => {
            discard(remove_symlink(link_path), link_path);
            LinkOutcome::Refreshed
        }
        Ok(_) if !options.force => {
            debug!("path occupied by a real file or directory, leaving it");
            return Ok(LinkOutcome::Preserved);
        }
        Ok(meta) => {
            let removed = if meta.is_dir() {
                fs::remove_dir_all(link_path)
            } else {
                fs::remove_file(link_path)
            };
            discard(removed, link_path);
            LinkOutcome::Replaced
        }
    };

    if let Some(parent) = link_path.parent() {
        fs::create_dir_all(parent)?;
    }
    create_symlink(target, link_path)?;

    debug!(?outcome, "linked");
    Ok(outcome)
}

fn discard(result: io::Result<()>, path: &Path) {
    if let Err(e) = result {
        debug!(path = %path.display(), error = %e, "cleanup failed, continuing");
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn remove_symlink(link: &Path) -> io::Result<()> {
    fs::remove_file(link)
}

#[cfg(windows)]
fn remove_symlink(link: &Path) -> io::Result<()> {
    // Directory symlinks on Windows are removed as directories
    fs::remove_file(link).or_else(|_| fs::remove_dir(link))
}
