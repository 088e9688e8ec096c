//! Directory layout shared by source repositories and project installs

use std::path::{Component, Path, PathBuf};

/// Asset root inside a source repository or a project
pub const AGENT_DIR: &str = ".agent";
pub const SKILLS_DIR: &str = "skills";
pub const WORKFLOWS_DIR: &str = "workflows";
pub const RULES_DIR: &str = "rules";

/// Governance checker shipped with the source repository
pub const GOVERNANCE_CHECKER: &str = "scripts/check-skill-governance.sh";
/// Repository verification script run by `oma verify`
pub const VERIFY_SCRIPT: &str = "scripts/verify-repo.sh";

/// Asset directories of a source repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirs {
    pub skills: PathBuf,
    pub workflows: PathBuf,
    pub rules: PathBuf,
}

impl SourceDirs {
    pub fn new(root: &Path) -> Self {
        let agent = root.join(AGENT_DIR);
        Self {
            skills: agent.join(SKILLS_DIR),
            workflows: agent.join(WORKFLOWS_DIR),
            rules: agent.join(RULES_DIR),
        }
    }
}

/// Resolve `path` against `base` and fold `.` and `..` lexically.
///
/// Never touches the filesystem, so symlinked components are not resolved.
pub fn resolve_lexical(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
