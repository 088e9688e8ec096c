//! Catalog manifest validation
//!
//! `validate` turns an arbitrary JSON value into a [`CatalogManifest`] or
//! fails with `ManifestInvalid` naming the exact field path, e.g.
//! `skills[3].status`, `duplicate_workflows:plan`, `missing_core_skill:ralph`.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::types::{CatalogCounts, CatalogEntry, CatalogManifest, EntryStatus};
use super::REQUIRED_CORE;
use crate::bail_manifest;
use crate::error::Result;

const DEFAULT_CATEGORY: &str = "utility";
const DEFAULT_SCHEMA_VERSION: i64 = 1;
const DEFAULT_CATALOG_VERSION: &str = "0.1.0";

/// The two entry collections, with the names used in field paths
#[derive(Clone, Copy)]
enum Collection {
    Skills,
    Workflows,
}

impl Collection {
    fn key(self) -> &'static str {
        match self {
            Collection::Skills => "skills",
            Collection::Workflows => "workflows",
        }
    }

    fn singular(self) -> &'static str {
        match self {
            Collection::Skills => "skill",
            Collection::Workflows => "workflow",
        }
    }
}

/// Validate and normalize a raw manifest. Pure.
pub fn validate(raw: &Value) -> Result<CatalogManifest> {
    let Some(root) = raw.as_object() else {
        bail_manifest!("root");
    };

    let skills = normalize_entries(root.get("skills"), Collection::Skills)?;
    let workflows = normalize_entries(root.get("workflows"), Collection::Workflows)?;

    require_core(&skills, Collection::Skills)?;
    require_core(&workflows, Collection::Workflows)?;

    Ok(CatalogManifest {
        schema_version: schema_version(root.get("schemaVersion"))?,
        catalog_version: catalog_version(root.get("catalogVersion")),
        skills,
        workflows,
    })
}

/// Total and active counts per collection
pub fn summarize(manifest: &CatalogManifest) -> CatalogCounts {
    CatalogCounts {
        skill_count: manifest.skills.len(),
        workflow_count: manifest.workflows.len(),
        active_skill_count: manifest.skills.iter().filter(|e| e.is_active()).count(),
        active_workflow_count: manifest.workflows.iter().filter(|e| e.is_active()).count(),
    }
}

fn normalize_entries(input: Option<&Value>, collection: Collection) -> Result<Vec<CatalogEntry>> {
    let key = collection.key();
    let Some(items) = input.and_then(Value::as_array) else {
        bail_manifest!(key);
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(entry) = item.as_object() else {
            bail_manifest!(format!("{key}[{index}]"));
        };

        let name = match entry.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => bail_manifest!(format!("{key}[{index}].name")),
        };

        let status = match non_empty(entry, "status") {
            None => EntryStatus::default(),
            Some(value) => match value.as_str().map(str::parse::<EntryStatus>) {
                Some(Ok(status)) => status,
                _ => bail_manifest!(format!("{key}[{index}].status")),
            },
        };

        if !seen.insert(name.clone()) {
            bail_manifest!(format!("duplicate_{key}:{name}"));
        }

        let category = match non_empty(entry, "category") {
            None => DEFAULT_CATEGORY.to_string(),
            Some(Value::String(category)) => category.clone(),
            Some(_) => bail_manifest!(format!("{key}[{index}].category")),
        };

        entries.push(CatalogEntry {
            name,
            category,
            status,
            canonical: entry
                .get("canonical")
                .and_then(Value::as_str)
                .map(str::to_string),
            core: entry.get("core") == Some(&Value::Bool(true)),
        });
    }

    Ok(entries)
}

fn require_core(entries: &[CatalogEntry], collection: Collection) -> Result<()> {
    for name in REQUIRED_CORE {
        let found = entries.iter().any(|e| e.name == name && e.is_active());
        if !found {
            bail_manifest!(format!("missing_core_{}:{name}", collection.singular()));
        }
    }
    Ok(())
}

/// A field's value unless it is absent or falsy (`null`, `false`, `0`, `""`)
fn non_empty<'a>(entry: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    entry.get(field).filter(|value| !is_falsy(value))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn schema_version(value: Option<&Value>) -> Result<i64> {
    let Some(value) = value.filter(|v| !is_falsy(v)) else {
        return Ok(DEFAULT_SCHEMA_VERSION);
    };

    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(true) => Some(1),
        _ => None,
    };

    match parsed {
        Some(version) => Ok(version),
        None => bail_manifest!("schemaVersion"),
    }
}

fn catalog_version(value: Option<&Value>) -> String {
    match value.filter(|v| !is_falsy(v)) {
        None => DEFAULT_CATALOG_VERSION.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
