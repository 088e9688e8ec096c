/// Options shared by every install step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    /// Overwrite existing files and replace non-symlink link occupants
    pub force: bool,
    /// Evaluate everything against the real filesystem but write nothing
    pub dry_run: bool,
    /// Report every compatibility link, not just a summary
    pub verbose: bool,
    pub install_skills: bool,
    pub install_workflows: bool,
    pub install_rules: bool,
    pub install_links: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            force: false,
            dry_run: false,
            verbose: false,
            install_skills: true,
            install_workflows: true,
            install_rules: true,
            install_links: true,
        }
    }
}
