//! Show Use Case
//!
//! Resolves a single module on demand: layout, checksum and dependencies.
//! Nothing is read from or written to the module store.

use std::path::{Path, PathBuf};

use crate::domain::entities::Module;
use crate::domain::ports::{
    BuildCollaborator, FileSystem, FsError, ModuleDependencySource, NoDeclaredDependencies,
};
use crate::domain::services::{
    normalize_module_root, DependencyResolver, ModuleIdentity, PathResolver,
    DEFAULT_DESCRIPTOR_FILE, DEFAULT_FINGERPRINT_FILE,
};
use crate::error::{PortalError, PortalResult};

/// Options for describing one module
#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Module directory (a legacy `WEB-INF` path is accepted)
    pub module_path: PathBuf,
    /// Source tree the module belongs to; the collaborator runs there
    pub portal_root: PathBuf,
    pub fingerprint_file: String,
    pub descriptor_file: String,
    pub display_build_output: bool,
}

impl ShowOptions {
    pub fn new(module_path: impl Into<PathBuf>, portal_root: impl Into<PathBuf>) -> Self {
        Self {
            module_path: module_path.into(),
            portal_root: portal_root.into(),
            fingerprint_file: DEFAULT_FINGERPRINT_FILE.to_string(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            display_build_output: false,
        }
    }

    pub fn with_fingerprint_file(mut self, file: impl Into<String>) -> Self {
        self.fingerprint_file = file.into();
        self
    }

    pub fn with_descriptor_file(mut self, file: impl Into<String>) -> Self {
        self.descriptor_file = file.into();
        self
    }

    pub fn with_display_build_output(mut self, display: bool) -> Self {
        self.display_build_output = display;
        self
    }
}

pub struct ShowUseCase<F, C>
where
    F: FileSystem,
    C: BuildCollaborator,
{
    fs: F,
    collaborator: C,
    declared: Box<dyn ModuleDependencySource>,
}

impl<F, C> ShowUseCase<F, C>
where
    F: FileSystem,
    C: BuildCollaborator,
{
    pub fn new(fs: F, collaborator: C) -> Self {
        Self {
            fs,
            collaborator,
            declared: Box::new(NoDeclaredDependencies),
        }
    }

    pub fn with_declared_dependencies(mut self, declared: Box<dyn ModuleDependencySource>) -> Self {
        self.declared = declared;
        self
    }

    /// Resolve the module. The result carries no output path.
    pub fn execute(&self, options: &ShowOptions) -> PortalResult<Module> {
        let module_path = normalize_module_root(&options.module_path);
        if !self.fs.is_dir(&module_path) {
            return Err(PortalError::Fs(FsError::NotFound(module_path)));
        }

        let checksum = ModuleIdentity::new(&self.fs, options.fingerprint_file.clone())
            .module_checksum(&module_path)?;
        let layout = PathResolver::new(&self.fs).resolve_layout(&module_path);
        let dependencies = DependencyResolver::new(
            &self.fs,
            &self.collaborator,
            self.declared.as_ref(),
            &options.portal_root,
        )
        .with_descriptor_file(options.descriptor_file.clone())
        .with_display_output(options.display_build_output)
        .resolve(&module_path)?;

        Ok(Module::new(module_path, layout, checksum).with_dependencies(dependencies))
    }
}

/// Portal root for a module path when none is configured: the closest
/// configured source tree containing it, else the module's parent.
pub fn portal_root_for(module_path: &Path, portal_dirs: &[PathBuf]) -> PathBuf {
    portal_dirs
        .iter()
        .filter(|dir| module_path.starts_with(dir))
        .max_by_key(|dir| dir.components().count())
        .cloned()
        .or_else(|| module_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| module_path.to_path_buf())
}
