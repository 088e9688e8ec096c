//! Keep skill/workflow counts and the release version in docs up to date
//!
//! Counts come from the asset directories, the version from the first
//! `## [x.y.z]` heading of `CHANGELOG.md`. Each target file carries a fixed
//! set of patterns whose numbers are rewritten in place.

use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{detect_skills, detect_workflows, SyncMode};
use crate::error::{OmaError, Result};
use crate::paths::SourceDirs;

const CHANGELOG: &str = "CHANGELOG.md";
const DEFAULT_VERSION: &str = "0.0.0";

/// Values substituted into the documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoFacts {
    pub skills: usize,
    pub workflows: usize,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataOutcome {
    pub facts: RepoFacts,
    /// Files whose content differs from the synced version
    pub changed: usize,
    /// Target files absent from the repository
    pub missing: usize,
}

/// Gather counts and version from `root`
pub fn collect_facts(root: &Path) -> Result<RepoFacts> {
    let sources = SourceDirs::new(root);
    Ok(RepoFacts {
        skills: detect_skills(&sources.skills)?.len(),
        workflows: detect_workflows(&sources.workflows)?.len(),
        version: changelog_version(&root.join(CHANGELOG))?,
    })
}

fn changelog_version(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(DEFAULT_VERSION.to_string());
    }
    let content = fs::read_to_string(path)?;
    let heading = Regex::new(r"(?m)^## \[(\d+\.\d+\.\d+)\]")?;
    Ok(heading
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string()))
}

/// Target file and its (pattern, replacement) pairs
fn targets(facts: &RepoFacts) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    let s = facts.skills;
    let w = facts.workflows;
    let v = &facts.version;

    vec![
        (
            "README.md",
            vec![
                (
                    r"\*\*\d+ specialized Skills\*\* and \*\*\d+ automated Workflows\*\*",
                    format!("**{s} specialized Skills** and **{w} automated Workflows**"),
                ),
                (
                    r"\*\*📊 Compatibility\*\*: \d+/\d+ Skills ✅ \| \d+/\d+ Workflows ✅ \| 0 Issues",
                    format!(
                        "**📊 Compatibility**: {s}/{s} Skills ✅ | {w}/{w} Workflows ✅ | 0 Issues"
                    ),
                ),
                (r"### 🧠 \d+ Specialized Skills", format!("### 🧠 {s} Specialized Skills")),
                (r"### ⚡️ \d+ Workflows", format!("### ⚡️ {w} Workflows")),
            ],
        ),
        (
            "README_CN.md",
            vec![
                (
                    r"\*\*\d+ 个专业技能\*\* 和 \*\*\d+ 个自动化工作流\*\*",
                    format!("**{s} 个专业技能** 和 **{w} 个自动化工作流**"),
                ),
                (
                    r"\*\*📊 兼容性\*\*: \d+/\d+ 技能 ✅ \| \d+/\d+ 工作流 ✅ \| 0 问题",
                    format!("**📊 兼容性**: {s}/{s} 技能 ✅ | {w}/{w} 工作流 ✅ | 0 问题"),
                ),
                (r"### 🧠 \d+ 个专业技能", format!("### 🧠 {s} 个专业技能")),
                (r"### ⚡️ \d+ 个工作流", format!("### ⚡️ {w} 个工作流")),
            ],
        ),
        (
            "MIGRATION_STATUS.md",
            vec![
                (
                    r"All \d+ skills and \d+ workflows",
                    format!("All {s} skills and {w} workflows"),
                ),
                (
                    r"\*\*100% Skills Compatible\*\*: \d+/\d+ skills",
                    format!("**100% Skills Compatible**: {s}/{s} skills"),
                ),
                (
                    r"\*\*100% Workflows Compatible\*\*: \d+/\d+ workflows",
                    format!("**100% Workflows Compatible**: {w}/{w} workflows"),
                ),
                (r"Total Skills:\s+\d+", format!("Total Skills:     {s}")),
                (r"Valid Skills:\s+\d+ \(100%\)", format!("Valid Skills:     {s} (100%)")),
                (r"Total Workflows:\s+\d+", format!("Total Workflows:  {w}")),
                (r"Valid Workflows:\s+\d+ \(100%\)", format!("Valid Workflows:  {w} (100%)")),
                (
                    r"All \d+ skills use `SKILL\.md` format",
                    format!("All {s} skills use `SKILL.md` format"),
                ),
                (
                    r"All \d+ workflows are markdown-based",
                    format!("All {w} workflows are markdown-based"),
                ),
                (r"Skills:\s+\d+/\d+ valid", format!("Skills:    {s}/{s} valid")),
                (r"Workflows:\s+\d+/\d+ valid", format!("Workflows: {w}/{w} valid")),
            ],
        ),
        (
            "docs/REFERENCE.md",
            vec![
                (
                    r"- \[Skills \(\d+ Total\)\]\(#skills-\d+-total\)",
                    format!("- [Skills ({s} Total)](#skills-{s}-total)"),
                ),
                (r"## Skills \(\d+ Total\)", format!("## Skills ({s} Total)")),
            ],
        ),
        (
            "docs/SKILL_GOVERNANCE_REPORT.md",
            vec![
                (r"- Skills total: \d+", format!("- Skills total: {s}")),
                (r"- Workflows total: \d+", format!("- Workflows total: {w}")),
            ],
        ),
        (
            "AGENTS.md",
            vec![(r"\*\*Version:\*\* \d+\.\d+\.\d+", format!("**Version:** {v}"))],
        ),
    ]
}

fn apply(content: &str, replacements: &[(&str, String)]) -> Result<String> {
    let mut next = content.to_string();
    for (pattern, replacement) in replacements {
        let re = Regex::new(pattern)?;
        next = re.replace_all(&next, NoExpand(replacement)).into_owned();
    }
    Ok(next)
}

/// Rewrite (or check) every documentation target under `root`
#[tracing::instrument(skip_all, fields(root = %root.display(), mode = ?mode))]
pub fn sync_metadata(root: &Path, mode: SyncMode) -> Result<MetadataOutcome> {
    let facts = collect_facts(root)?;
    let mut changed = 0;
    let mut missing = 0;

    for (file, replacements) in targets(&facts) {
        let path = root.join(file);
        if !path.exists() {
            missing += 1;
            continue;
        }

        let before = fs::read_to_string(&path)?;
        let after = apply(&before, &replacements)?;
        if before == after {
            continue;
        }

        changed += 1;
        if mode == SyncMode::Write {
            fs::write(&path, after)?;
            debug!(file, "updated metadata");
        }
    }

    if mode == SyncMode::Verify && changed > 0 {
        return Err(OmaError::OutOfSync {
            what: format!("Metadata ({changed} file(s)) is"),
            remedy: "oma sync-metadata".to_string(),
        });
    }

    Ok(MetadataOutcome {
        facts,
        changed,
        missing,
    })
}
