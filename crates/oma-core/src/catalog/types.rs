use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Active,
    Alias,
    Merged,
    Deprecated,
    Internal,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Active => "active",
            EntryStatus::Alias => "alias",
            EntryStatus::Merged => "merged",
            EntryStatus::Deprecated => "deprecated",
            EntryStatus::Internal => "internal",
        }
    }
}

impl FromStr for EntryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EntryStatus::Active),
            "alias" => Ok(EntryStatus::Alias),
            "merged" => Ok(EntryStatus::Merged),
            "deprecated" => Ok(EntryStatus::Deprecated),
            "internal" => Ok(EntryStatus::Internal),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill or workflow listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub core: bool,
}

impl CatalogEntry {
    pub fn is_active(&self) -> bool {
        self.status == EntryStatus::Active
    }
}

/// Validated catalog of skills and workflows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogManifest {
    pub schema_version: i64,
    pub catalog_version: String,
    pub skills: Vec<CatalogEntry>,
    pub workflows: Vec<CatalogEntry>,
}

/// Total and active entry counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCounts {
    pub skill_count: usize,
    pub workflow_count: usize,
    pub active_skill_count: usize,
    pub active_workflow_count: usize,
}
