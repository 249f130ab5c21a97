//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    DEFAULT_DESCRIPTOR_FILE, DEFAULT_FINGERPRINT_FILE, DEFAULT_PORTAL_LIB_DIRS,
};
use crate::domain::value_objects::{ExclusionSet, MissingFingerprintPolicy};
use crate::error::{PortalError, PortalResult};
use crate::infrastructure::repositories::DEFAULT_DEPENDENCY_FILE;

use super::loader::{self, ConfigWarning};

/// Where outputs go and which source trees feed them
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Output root; each source tree gets `<dir>/<basename(tree)>`
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default)]
    pub portal_dirs: Vec<PathBuf>,
}

/// Discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,

    #[serde(default = "default_fingerprint_file")]
    pub fingerprint_file: String,

    #[serde(default)]
    pub missing_fingerprint: MissingFingerprintPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignored_dirs: default_ignored_dirs(),
            fingerprint_file: default_fingerprint_file(),
            missing_fingerprint: MissingFingerprintPolicy::default(),
        }
    }
}

fn default_ignored_dirs() -> Vec<String> {
    [".git", ".gradle", "build", "classes", "node_modules", "tmp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fingerprint_file() -> String {
    DEFAULT_FINGERPRINT_FILE.to_string()
}

/// External build tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Overrides the wrapper lookup
    #[serde(default)]
    pub command: Option<String>,

    #[serde(default = "default_descriptor_file")]
    pub descriptor_file: String,

    #[serde(default)]
    pub display_output: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            descriptor_file: default_descriptor_file(),
            display_output: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_descriptor_file() -> String {
    DEFAULT_DESCRIPTOR_FILE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependenciesConfig {
    /// Declared module dependencies; relative to the config file's directory
    #[serde(default = "default_dependency_file")]
    pub file: PathBuf,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            file: default_dependency_file(),
        }
    }
}

fn default_dependency_file() -> PathBuf {
    PathBuf::from(DEFAULT_DEPENDENCY_FILE)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorConfig {
    #[serde(default)]
    pub exclude_types: Vec<String>,

    /// Portal library directories, relative to each source tree
    #[serde(default = "default_portal_lib_dirs")]
    pub portal_lib_dirs: Vec<PathBuf>,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            exclude_types: Vec::new(),
            portal_lib_dirs: default_portal_lib_dirs(),
        }
    }
}

fn default_portal_lib_dirs() -> Vec<PathBuf> {
    DEFAULT_PORTAL_LIB_DIRS.iter().map(PathBuf::from).collect()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub dependencies: DependenciesConfig,

    #[serde(default)]
    pub descriptor: DescriptorConfig,

    /// File this configuration was read from
    #[serde(skip)]
    pub origin: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PortalResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PortalResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, then discovered files, then defaults; env overrides applied.
    pub fn discover(explicit: Option<&Path>) -> PortalResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (PORTALMOD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Output root; required
    pub fn project_dir(&self) -> PortalResult<&Path> {
        self.project
            .dir
            .as_deref()
            .ok_or_else(|| PortalError::MissingSetting {
                key: "project.dir".to_string(),
            })
    }

    /// Configured source trees; at least one is required
    pub fn portal_dirs(&self) -> PortalResult<&[PathBuf]> {
        if self.project.portal_dirs.is_empty() {
            return Err(PortalError::MissingSetting {
                key: "portal.dirs".to_string(),
            });
        }
        Ok(&self.project.portal_dirs)
    }

    /// Output root for one source tree: `<project.dir>/<basename(portal)>`
    pub fn project_output(&self, portal_dir: &Path) -> PortalResult<PathBuf> {
        let root = self.project_dir()?;
        Ok(match portal_dir.file_name() {
            Some(name) => root.join(name),
            None => root.to_path_buf(),
        })
    }

    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::new(&self.scan.ignored_dirs)
    }

    /// Declared dependency file, resolved against the config file's directory
    pub fn dependency_file(&self) -> PathBuf {
        let file = &self.dependencies.file;
        if file.is_absolute() {
            return file.clone();
        }
        match self.origin.as_deref().and_then(Path::parent) {
            Some(base) => base.join(file),
            None => file.clone(),
        }
    }
}
