//! Generated catalog files: write, verify, or preview

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::build::build_manifest;
use super::schema::summarize;
use super::types::{CatalogCounts, CatalogEntry, CatalogManifest};
use crate::error::{OmaError, Result};
use crate::paths::SourceDirs;

pub const MANIFEST_PATH: &str = ".governance/catalog-manifest.json";
pub const PUBLIC_CATALOG_PATH: &str = "docs/generated/public-catalog.json";

/// How generated files are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Rewrite the files
    Write,
    /// Fail if the files on disk do not match a fresh build
    Verify,
    /// Compute counts only
    DryRun,
}

/// Published catalog with generation timestamp and counts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicCatalog<'a> {
    generated_at: String,
    counts: CatalogCounts,
    skills: &'a [CatalogEntry],
    workflows: &'a [CatalogEntry],
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogOutcome {
    pub counts: CatalogCounts,
    pub manifest_path: PathBuf,
    pub public_path: PathBuf,
}

/// Build the catalog from `source_root` and apply `mode` to the generated files
#[tracing::instrument(skip_all, fields(source_root = %source_root.display(), mode = ?mode))]
pub fn sync_catalog(
    source_root: &Path,
    mode: SyncMode,
    now: DateTime<Utc>,
) -> Result<CatalogOutcome> {
    let manifest = build_manifest(&SourceDirs::new(source_root), now.date_naive())?;
    let counts = summarize(&manifest);
    let outcome = CatalogOutcome {
        counts,
        manifest_path: source_root.join(MANIFEST_PATH),
        public_path: source_root.join(PUBLIC_CATALOG_PATH),
    };

    match mode {
        SyncMode::DryRun => {}
        SyncMode::Write => {
            write_json(&outcome.manifest_path, &manifest)?;
            let public = PublicCatalog {
                generated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                counts,
                skills: &manifest.skills,
                workflows: &manifest.workflows,
            };
            write_json(&outcome.public_path, &public)?;
        }
        SyncMode::Verify => {
            let manifest_ok = manifest_matches(&outcome.manifest_path, &manifest)?;
            let public_ok = public_matches(&outcome.public_path, &manifest, &counts)?;
            if !manifest_ok || !public_ok {
                return Err(OmaError::OutOfSync {
                    what: "Catalog files are".to_string(),
                    remedy: "oma catalog".to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;
    debug!(path = %path.display(), "wrote catalog file");
    Ok(())
}

/// Existing file as JSON; missing or unparsable files read as `None`
fn read_json(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content).ok())
}

/// Compare everything except `catalogVersion`, which is the build date
fn manifest_matches(path: &Path, manifest: &CatalogManifest) -> Result<bool> {
    let Some(existing) = read_json(path)? else {
        return Ok(false);
    };
    let expected = serde_json::to_value(manifest)?;
    Ok(["schemaVersion", "skills", "workflows"]
        .iter()
        .all(|key| existing.get(key) == expected.get(key)))
}

fn public_matches(path: &Path, manifest: &CatalogManifest, counts: &CatalogCounts) -> Result<bool> {
    let Some(existing) = read_json(path)? else {
        return Ok(false);
    };
    Ok(existing.get("counts") == Some(&serde_json::to_value(counts)?)
        && existing.get("skills") == Some(&serde_json::to_value(&manifest.skills)?)
        && existing.get("workflows") == Some(&serde_json::to_value(&manifest.workflows)?))
}
