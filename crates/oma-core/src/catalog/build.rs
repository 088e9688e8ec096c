//! Build a catalog manifest from the asset directories on disk

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::schema::validate;
use super::types::CatalogManifest;
use super::{category_for, is_core};
use crate::error::Result;
use crate::paths::SourceDirs;

pub const SCHEMA_VERSION: i64 = 1;

/// Skill names: one per directory under the skills root, sorted
pub fn detect_skills(skills_root: &Path) -> Result<Vec<String>> {
    if !skills_root.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(skills_root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Workflow names: one per `*.md` file under the workflows root, sorted
pub fn detect_workflows(workflows_root: &Path) -> Result<Vec<String>> {
    if !workflows_root.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(workflows_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if let Some(name) = file_name.strip_suffix(".md") {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

fn entries(names: &[String]) -> Vec<Value> {
    names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "category": category_for(name),
                "status": "active",
                "core": is_core(name),
            })
        })
        .collect()
}

/// Detect assets under `sources` and validate the resulting manifest.
///
/// `catalog_version` is the build date, so two builds on different days
/// differ only in that field.
pub fn build_manifest(sources: &SourceDirs, date: NaiveDate) -> Result<CatalogManifest> {
    let skills = detect_skills(&sources.skills)?;
    let workflows = detect_workflows(&sources.workflows)?;

    let raw = json!({
        "schemaVersion": SCHEMA_VERSION,
        "catalogVersion": date.format("%Y-%m-%d").to_string(),
        "skills": entries(&skills),
        "workflows": entries(&workflows),
    });

    validate(&raw)
}
