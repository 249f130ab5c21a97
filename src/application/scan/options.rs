//! Scan options

use std::path::PathBuf;

use crate::domain::services::{
    DEFAULT_DESCRIPTOR_FILE, DEFAULT_FINGERPRINT_FILE, DEFAULT_PORTAL_LIB_DIRS,
};
use crate::domain::value_objects::{ExclusionSet, MissingFingerprintPolicy};

/// Options for one scan of one source tree
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Source tree to walk
    pub portal_root: PathBuf,
    /// Output root for this source tree (records, descriptors, settings)
    pub project_root: PathBuf,
    /// Directory basenames never entered
    pub excluded: ExclusionSet,
    /// File whose checksum identifies a module's build state
    pub fingerprint_file: String,
    /// File whose presence makes the build collaborator run
    pub descriptor_file: String,
    pub missing_fingerprint: MissingFingerprintPolicy,
    /// Let the build collaborator's stderr through
    pub display_build_output: bool,
    /// Patterns excluded in generated descriptors
    pub exclude_types: Vec<String>,
    /// Library directories of the source tree, relative to `portal_root`
    pub portal_lib_dirs: Vec<PathBuf>,
    /// Drop every record first and regenerate everything
    pub full: bool,
    /// Classify only; write nothing
    pub dry_run: bool,
}

impl ScanOptions {
    pub fn new(portal_root: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            portal_root: portal_root.into(),
            project_root: project_root.into(),
            excluded: ExclusionSet::empty(),
            fingerprint_file: DEFAULT_FINGERPRINT_FILE.to_string(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            missing_fingerprint: MissingFingerprintPolicy::default(),
            display_build_output: false,
            exclude_types: Vec::new(),
            portal_lib_dirs: DEFAULT_PORTAL_LIB_DIRS.iter().map(PathBuf::from).collect(),
            full: false,
            dry_run: false,
        }
    }

    pub fn with_excluded(mut self, excluded: ExclusionSet) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_fingerprint_file(mut self, name: impl Into<String>) -> Self {
        self.fingerprint_file = name.into();
        self
    }

    pub fn with_descriptor_file(mut self, name: impl Into<String>) -> Self {
        self.descriptor_file = name.into();
        self
    }

    pub fn with_missing_fingerprint(mut self, policy: MissingFingerprintPolicy) -> Self {
        self.missing_fingerprint = policy;
        self
    }

    pub fn with_display_build_output(mut self, display: bool) -> Self {
        self.display_build_output = display;
        self
    }

    pub fn with_exclude_types(mut self, types: Vec<String>) -> Self {
        self.exclude_types = types;
        self
    }

    pub fn with_portal_lib_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.portal_lib_dirs = dirs;
        self
    }

    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
