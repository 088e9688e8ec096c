//! Recursive, non-clobbering directory copy

use std::fs;
use std::path::Path;
use std::time::Instant;

use same_file::is_same_file;
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::InstallOptions;
use crate::error::Result;
use crate::trace_time;

/// Copy the tree under `src` into `dest`, returning the number of files
/// copied (or that would be copied under dry-run).
///
/// A missing `src` is a no-op returning 0. Existing destination files are
/// kept unless `force` is set. Symlinks inside `src` are neither followed nor
/// copied, so link cycles in the source cannot recurse.
///
/// When `dest` is `src` (directly or through a symlink) nothing is copied,
/// and a destination file that is the source file itself is never rewritten,
/// even under `force`.
#[tracing::instrument(
    skip_all,
    fields(
        src = %src.display(),
        dest = %dest.display(),
        force = options.force,
        dry_run = options.dry_run,
    )
)]
pub fn copy_tree(src: &Path, dest: &Path, options: &InstallOptions) -> Result<usize> {
    if !src.exists() {
        trace!("source missing, nothing to copy");
        return Ok(0);
    }
    if dest.exists() && fs::canonicalize(src)? == fs::canonicalize(dest)? {
        debug!("destination is the source tree, nothing to copy");
        return Ok(0);
    }

    let start = Instant::now();
    ensure_dir(dest, options.dry_run)?;

    let mut count = 0;
    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let to = dest.join(rel);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            ensure_dir(&to, options.dry_run)?;
            continue;
        }
        if !file_type.is_file() {
            trace!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        if to.exists() {
            if is_same_file(entry.path(), &to)? {
                debug!(path = %to.display(), "destination is the source file");
                continue;
            }
            if !options.force {
                trace!(path = %to.display(), "keeping existing file");
                continue;
            }
        }

        if !options.dry_run {
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &to)?;
        }
        count += 1;
    }

    trace_time!(start, "copy_tree", files = count);
    Ok(count)
}

fn ensure_dir(dir: &Path, dry_run: bool) -> Result<()> {
    if !dry_run {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
