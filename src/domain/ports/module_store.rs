//! ModuleStore port - persistence of per-module metadata records
//!
//! The store is the system of record for "what we built last time". A missing
//! or unreadable record is never an error on load: it reads as "never built".

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Module;
use crate::domain::ports::FsError;

/// Directory under a project output root holding one directory per module
pub const MODULES_DIR: &str = "modules";

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Module store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Only modules with an output location can be persisted
    #[error("module {} has no output path", .module.display())]
    MissingOutputPath { module: PathBuf },

    /// Records store paths as text
    #[error("cannot record non UTF-8 path {}", .path.display())]
    NonUtf8Path { path: PathBuf },

    /// Underlying file system failure
    #[error("module store I/O failed: {0}")]
    Fs(#[from] FsError),
}

/// Abstract repository for module records
pub trait ModuleStore {
    /// Load every readable record under `output_root`, keyed by module path.
    fn load(&self, output_root: &Path) -> BTreeMap<PathBuf, Module>;

    /// Persist one module's record (paths and checksum only).
    fn save(&self, module: &Module) -> StoreResult<()>;

    /// Delete one module's generated output directory.
    fn remove(&self, output_path: &Path) -> StoreResult<()>;

    /// Delete every module output under `output_root`; returns how many.
    fn clear(&self, output_root: &Path) -> StoreResult<usize>;

    /// Where a module's record and descriptor live.
    fn output_path_for(&self, output_root: &Path, module_name: &str) -> PathBuf {
        output_root.join(MODULES_DIR).join(module_name)
    }
}
