//! Install scope selection
//!
//! A scope decides where assets land:
//! - `user`: the per-user global directory
//! - `project-local`: `<project>/.agent`, not shared
//! - `project`: `<project>/.agent`, shared and committed; setup leaves it alone

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OmaError, Result};

/// Install locus for skills, workflows and rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Global per-user install (default)
    #[default]
    User,
    /// Project install that is not shared
    ProjectLocal,
    /// Shared project install
    Project,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::User, Scope::ProjectLocal, Scope::Project];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::ProjectLocal => "project-local",
            Scope::Project => "project",
        }
    }

    /// Whether setup copies skills, workflows and rules for this scope.
    /// The shared `project` tree is owned by the project, not by setup.
    pub fn copies_assets(&self) -> bool {
        !matches!(self, Scope::Project)
    }
}

impl FromStr for Scope {
    type Err = OmaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(Scope::User),
            "project-local" => Ok(Scope::ProjectLocal),
            "project" => Ok(Scope::Project),
            other => Err(OmaError::InvalidScope(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the effective scope: explicit flag, then persisted choice, then default.
///
/// Only the explicit value can be malformed; persisted values are parsed
/// before they reach this function.
pub fn resolve_scope(
    explicit: Option<&str>,
    persisted: Option<Scope>,
    default: Scope,
) -> Result<Scope> {
    match explicit {
        Some(value) => value.parse(),
        None => Ok(persisted.unwrap_or(default)),
    }
}
