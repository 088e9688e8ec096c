//! Destination resolution per install scope
//!
//! Pure path computation: nothing here reads or writes the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::paths::{resolve_lexical, AGENT_DIR, RULES_DIR, SKILLS_DIR, WORKFLOWS_DIR};
use crate::scope::Scope;

/// Per-user install base, relative to the home directory
const USER_BASE: [&str; 2] = [".gemini", "antigravity"];
/// Canonical per-user workflows directory, relative to the user base
const GLOBAL_WORKFLOWS_DIR: &str = "global_workflows";
/// Legacy project alias that points at `.agent`
const PROJECT_ALIAS_DIR: &str = ".antigravity";
/// Home-relative roots whose `workflows` directory other tools still read
const LEGACY_WORKFLOW_ROOTS: [&str; 4] = [".agent", ".agents", "_agent", "_agents"];

/// A symlink to create at `link`, pointing at `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatLink {
    pub target: PathBuf,
    pub link: PathBuf,
}

impl CompatLink {
    fn new(target: impl Into<PathBuf>, link: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            link: link.into(),
        }
    }
}

/// Where each asset kind is installed for a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationSet {
    pub skills: PathBuf,
    pub workflows: PathBuf,
    pub rules: PathBuf,
    /// Links bridging conventional global workflow paths to the canonical one
    pub compat_links: Vec<CompatLink>,
    /// Project-root alias link (project scopes only)
    pub project_link: Option<CompatLink>,
}

/// Compute destinations for `scope`.
///
/// `target` overrides the project root for project scopes; relative targets
/// are resolved against `working_dir`. `home` is the user's home directory and
/// only matters for the `user` scope.
pub fn resolve_destinations(
    scope: Scope,
    working_dir: &Path,
    target: Option<&Path>,
    home: &Path,
) -> DestinationSet {
    match scope {
        Scope::User => user_destinations(home),
        Scope::ProjectLocal | Scope::Project => {
            let project_root = match target {
                Some(target) => resolve_lexical(working_dir, target),
                None => resolve_lexical(working_dir, Path::new(".")),
            };
            project_destinations(&project_root)
        }
    }
}

fn user_destinations(home: &Path) -> DestinationSet {
    let base: PathBuf = USER_BASE.iter().fold(home.to_path_buf(), |p, c| p.join(c));
    let global_workflows = base.join(GLOBAL_WORKFLOWS_DIR);

    let mut compat_links = vec![CompatLink::new(&global_workflows, base.join(WORKFLOWS_DIR))];
    compat_links.extend(
        LEGACY_WORKFLOW_ROOTS
            .iter()
            .map(|root| CompatLink::new(&global_workflows, home.join(root).join(WORKFLOWS_DIR))),
    );

    DestinationSet {
        skills: base.join(SKILLS_DIR),
        workflows: global_workflows,
        rules: base.join(RULES_DIR),
        compat_links,
        project_link: None,
    }
}

fn project_destinations(project_root: &Path) -> DestinationSet {
    let agent_root = project_root.join(AGENT_DIR);
    DestinationSet {
        skills: agent_root.join(SKILLS_DIR),
        workflows: agent_root.join(WORKFLOWS_DIR),
        rules: agent_root.join(RULES_DIR),
        compat_links: Vec::new(),
        // Relative target so the link survives moving the project
        project_link: Some(CompatLink::new(AGENT_DIR, project_root.join(PROJECT_ALIAS_DIR))),
    }
}
