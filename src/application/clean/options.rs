//! Clean options

use std::path::PathBuf;

use crate::infrastructure::descriptor::SETTINGS_FILE;

/// Options for the clean command
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Project output root whose generated modules are removed
    pub project_root: PathBuf,
    /// Report what would be removed without touching anything
    pub dry_run: bool,
    /// Project-level settings file name, removed alongside the modules
    pub settings_file: String,
}

impl CleanOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            dry_run: false,
            settings_file: SETTINGS_FILE.to_string(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_settings_file(mut self, settings_file: impl Into<String>) -> Self {
        self.settings_file = settings_file.into();
        self
    }
}
