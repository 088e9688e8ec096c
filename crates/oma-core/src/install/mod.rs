//! Install steps: asset copies and compatibility links
//!
//! Each step is independent and gated by scope and its own opt-out flag.
//! Steps never catch errors; the first failure aborts the run and a re-run
//! converges because copies skip existing files and links are recreated.

pub mod copy;
pub mod link;
mod options;

use std::path::PathBuf;

use serde::Serialize;

use crate::destinations::DestinationSet;
use crate::error::Result;
use crate::paths::SourceDirs;
use crate::scope::Scope;
pub use copy::copy_tree;
pub use link::{sync_link, LinkOutcome};
pub use options::InstallOptions;

/// Copied asset categories, in install order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Skills,
    Workflows,
    Rules,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Skills, AssetKind::Workflows, AssetKind::Rules];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Skills => "skills",
            AssetKind::Workflows => "workflows",
            AssetKind::Rules => "rules",
        }
    }
}

/// One synchronized link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub link: PathBuf,
    pub target: PathBuf,
    pub outcome: LinkOutcome,
    /// Project-root alias rather than a global compatibility link
    pub project: bool,
}

/// Result of a single install step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepOutcome {
    Skipped,
    Copied { files: usize, destination: PathBuf },
    Linked { links: Vec<LinkReport> },
}

/// Runs install steps for one resolved scope and destination set
pub struct Installer<'a> {
    scope: Scope,
    sources: &'a SourceDirs,
    destinations: &'a DestinationSet,
    options: &'a InstallOptions,
}

impl<'a> Installer<'a> {
    pub fn new(
        scope: Scope,
        sources: &'a SourceDirs,
        destinations: &'a DestinationSet,
        options: &'a InstallOptions,
    ) -> Self {
        Self {
            scope,
            sources,
            destinations,
            options,
        }
    }

    fn wants(&self, kind: AssetKind) -> bool {
        let enabled = match kind {
            AssetKind::Skills => self.options.install_skills,
            AssetKind::Workflows => self.options.install_workflows,
            AssetKind::Rules => self.options.install_rules,
        };
        enabled && self.scope.copies_assets()
    }

    /// Copy one asset category into its destination
    pub fn install_assets(&self, kind: AssetKind) -> Result<StepOutcome> {
        if !self.wants(kind) {
            return Ok(StepOutcome::Skipped);
        }

        let (src, dest) = match kind {
            AssetKind::Skills => (&self.sources.skills, &self.destinations.skills),
            AssetKind::Workflows => (&self.sources.workflows, &self.destinations.workflows),
            AssetKind::Rules => (&self.sources.rules, &self.destinations.rules),
        };

        let files = copy_tree(src, dest, self.options)?;
        Ok(StepOutcome::Copied {
            files,
            destination: dest.clone(),
        })
    }

    /// Synchronize the project alias link (if any) and every compatibility link
    pub fn install_links(&self) -> Result<StepOutcome> {
        if !self.options.install_links || self.scope == Scope::Project {
            return Ok(StepOutcome::Skipped);
        }

        let mut links = Vec::new();
        if let Some(project_link) = &self.destinations.project_link {
            let outcome = sync_link(&project_link.target, &project_link.link, self.options)?;
            links.push(LinkReport {
                link: project_link.link.clone(),
                target: project_link.target.clone(),
                outcome,
                project: true,
            });
        }

        for compat in &self.destinations.compat_links {
            let outcome = sync_link(&compat.target, &compat.link, self.options)?;
            links.push(LinkReport {
                link: compat.link.clone(),
                target: compat.target.clone(),
                outcome,
                project: false,
            });
        }

        Ok(StepOutcome::Linked { links })
    }
}
