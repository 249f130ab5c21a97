//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    pub project_root: PathBuf,
    /// Output directories of recorded modules (removed, or to be removed)
    pub outputs: Vec<PathBuf>,
    /// Module output directories actually deleted
    pub removed: usize,
    /// Settings file that was (or would be) deleted
    pub settings: Option<PathBuf>,
    pub dry_run: bool,
}

impl CleanResult {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty() && self.removed == 0 && self.settings.is_none()
    }
}
