use std::path::{Path, PathBuf};

use oma_core::scope::Scope;
use serde::Serialize;

/// A single path check
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Display name (e.g. "Source skills")
    pub name: &'static str,
    pub path: PathBuf,
    pub exists: bool,
    /// Whether a missing path fails the check
    pub required: bool,
}

impl Check {
    pub fn probe(name: &'static str, path: impl Into<PathBuf>, required: bool) -> Self {
        let path = path.into();
        Check {
            name,
            exists: path.exists(),
            path,
            required,
        }
    }

    pub fn passed(&self) -> bool {
        self.exists || !self.required
    }

    /// Path when present, `missing` otherwise
    pub fn location(&self) -> String {
        if self.exists {
            self.path.display().to_string()
        } else {
            "missing".to_string()
        }
    }
}

/// Result of running doctor checks
#[derive(Debug, Clone, Serialize)]
pub struct DoctorResult {
    pub scope: Scope,
    pub source_root: PathBuf,
    pub checks: Vec<Check>,
    pub passed: usize,
    pub total: usize,
}

impl DoctorResult {
    pub fn new(scope: Scope, source_root: &Path, checks: Vec<Check>) -> Self {
        let passed = checks.iter().filter(|c| c.passed()).count();
        let total = checks.len();
        DoctorResult {
            scope,
            source_root: source_root.to_path_buf(),
            checks,
            passed,
            total,
        }
    }

    pub fn healthy(&self) -> bool {
        self.passed == self.total
    }
}
