//! DescriptorGenerator port - writes generated build descriptors

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{Module, ModuleMap};
use crate::domain::ports::FsError;

/// Descriptor generation errors
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Only modules with an output location get a descriptor
    #[error("cannot generate a descriptor for {}: no output path", .module.display())]
    MissingOutputPath { module: PathBuf },

    #[error("writing descriptor failed: {0}")]
    Fs(#[from] FsError),
}

/// Values shared by every descriptor of one project
#[derive(Debug, Clone, Default)]
pub struct DescriptorContext {
    /// Root of the source tree the modules were discovered in
    pub portal_root: PathBuf,
    /// File patterns excluded from generated source sets
    pub exclude_types: Vec<String>,
    /// Portal library archives added to every module's compile classpath
    pub portal_lib_jars: Vec<PathBuf>,
    /// Every discovered module; module references resolve against it
    pub modules: ModuleMap,
}

/// Generates per-module and per-project build descriptors
pub trait DescriptorGenerator {
    /// Write the descriptor for one module into its output path.
    fn generate(
        &self,
        module: &Module,
        context: &DescriptorContext,
    ) -> Result<PathBuf, DescriptorError>;

    /// Write the project-level descriptor listing every module.
    fn generate_settings(
        &self,
        project_root: &Path,
        modules: &ModuleMap,
    ) -> Result<PathBuf, DescriptorError>;
}
