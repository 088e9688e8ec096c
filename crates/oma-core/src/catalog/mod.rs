//! Skill and workflow catalog: manifest schema, detection, and generated files

pub mod build;
pub mod generate;
pub mod schema;
pub mod types;

pub use build::{build_manifest, detect_skills, detect_workflows};
pub use generate::{sync_catalog, CatalogOutcome, SyncMode};
pub use schema::{summarize, validate};
pub use types::{CatalogCounts, CatalogEntry, CatalogManifest, EntryStatus};

/// Entries every catalog must carry, active, in both collections
pub const REQUIRED_CORE: [&str; 7] = [
    "autopilot",
    "ultrawork",
    "pipeline",
    "ralph",
    "plan",
    "doctor",
    "help",
];

/// Known entry categories; anything unlisted is `utility`
const CATEGORIES: [(&str, &str); 14] = [
    ("autopilot", "execution"),
    ("ultrawork", "execution"),
    ("swarm", "execution"),
    ("pipeline", "execution"),
    ("ralph", "execution"),
    ("plan", "planning"),
    ("review", "planning"),
    ("analyze", "analysis"),
    ("research", "analysis"),
    ("security-review", "quality"),
    ("code-review", "quality"),
    ("tdd", "quality"),
    ("doctor", "utility"),
    ("help", "utility"),
];

/// Category for a skill or workflow name
pub fn category_for(name: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, category)| *category)
        .unwrap_or("utility")
}

pub fn is_core(name: &str) -> bool {
    REQUIRED_CORE.contains(&name)
}
