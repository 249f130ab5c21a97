//! Scan result types

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::ModuleMap;
use crate::domain::services::Classification;

/// Step at which a module failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Fingerprint existed but could not be read
    Fingerprint,
    /// Bundled archives or the build collaborator failed
    Dependencies,
    /// Removing the previous output or writing the record failed
    Store,
    /// Writing the generated descriptor failed
    Descriptor,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureStage::Fingerprint => "fingerprint",
            FailureStage::Dependencies => "dependencies",
            FailureStage::Store => "store",
            FailureStage::Descriptor => "descriptor",
        })
    }
}

/// A module the scan could not handle
#[derive(Debug, Clone)]
pub struct ModuleFailure {
    pub module_path: PathBuf,
    pub name: String,
    pub stage: FailureStage,
    pub error: String,
}

/// A classified module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOutcome {
    pub name: String,
    pub module_path: PathBuf,
    pub classification: Classification,
    pub output_path: PathBuf,
}

/// A module whose record and output were dropped because the walk no
/// longer finds it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedModule {
    pub name: String,
    pub module_path: PathBuf,
    pub output_path: PathBuf,
}

/// Result of scanning one source tree
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub portal_root: PathBuf,
    pub project_root: PathBuf,
    /// Modules left untouched
    pub unchanged: Vec<ModuleOutcome>,
    /// New or Changed modules regenerated (or, in a dry run, that would be)
    pub processed: Vec<ModuleOutcome>,
    /// Modules gone from the source tree (in a dry run, that would be dropped)
    pub removed: Vec<RemovedModule>,
    pub failures: Vec<ModuleFailure>,
    /// Every module discovered, grouped by logical parent
    pub modules: ModuleMap,
    /// Records dropped up front by a full rebuild
    pub cleared: usize,
    /// Project settings written at the end of the run
    pub settings_path: Option<PathBuf>,
    pub dry_run: bool,
    /// Stopped early on request; unprocessed modules keep their old state
    pub interrupted: bool,
}

impl ScanReport {
    pub fn new(portal_root: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            portal_root: portal_root.into(),
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::Unchanged => self.unchanged.len(),
            _ => self
                .processed
                .iter()
                .filter(|m| m.classification == classification)
                .count(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.interrupted
    }

    pub fn has_changes(&self) -> bool {
        !self.processed.is_empty() || !self.removed.is_empty()
    }
}
