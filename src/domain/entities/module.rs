//! Module entity - one buildable unit of the source tree
//!
//! A module is built fresh on every discovery pass and never mutated after
//! construction; the `with_*` methods consume it and return a new value.
//! Equality covers the module path, the six resolved paths and the checksum
//! only, so a freshly computed module can be compared against a persisted one.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Checksum, PathKind, ResourceSet};

use super::dependency::{Dependencies, JarDependency, ModuleDependency};

/// Name of a module: the basename of its logical root.
pub fn module_name(module_path: &Path) -> String {
    module_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| module_path.display().to_string())
}

/// Resolved source, resource and test directories of a module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleLayout {
    pub source: Option<PathBuf>,
    pub source_resource: Option<PathBuf>,
    pub test_unit: Option<PathBuf>,
    pub test_unit_resource: Option<PathBuf>,
    pub test_integration: Option<PathBuf>,
    pub test_integration_resource: Option<PathBuf>,
}

impl ModuleLayout {
    pub fn get(&self, kind: PathKind) -> Option<&Path> {
        let slot = match kind {
            PathKind::Source => &self.source,
            PathKind::Resource(ResourceSet::Main) => &self.source_resource,
            PathKind::TestUnit => &self.test_unit,
            PathKind::Resource(ResourceSet::Test) => &self.test_unit_resource,
            PathKind::TestIntegration => &self.test_integration,
            PathKind::Resource(ResourceSet::TestIntegration) => &self.test_integration_resource,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, kind: PathKind, path: Option<PathBuf>) {
        let slot = match kind {
            PathKind::Source => &mut self.source,
            PathKind::Resource(ResourceSet::Main) => &mut self.source_resource,
            PathKind::TestUnit => &mut self.test_unit,
            PathKind::Resource(ResourceSet::Test) => &mut self.test_unit_resource,
            PathKind::TestIntegration => &mut self.test_integration,
            PathKind::Resource(ResourceSet::TestIntegration) => {
                &mut self.test_integration_resource
            }
        };
        *slot = path;
    }

    /// Resolved kinds with their directories, in record order
    pub fn resolved(&self) -> impl Iterator<Item = (PathKind, &Path)> {
        PathKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|p| (kind, p)))
    }

    pub fn is_empty(&self) -> bool {
        self.resolved().next().is_none()
    }
}

/// A discovered module
#[derive(Debug, Clone)]
pub struct Module {
    module_path: PathBuf,
    output_path: Option<PathBuf>,
    layout: ModuleLayout,
    dependencies: Dependencies,
    checksum: Option<Checksum>,
}

impl Module {
    /// Transient module (no output location, no dependencies yet)
    pub fn new(
        module_path: impl Into<PathBuf>,
        layout: ModuleLayout,
        checksum: Option<Checksum>,
    ) -> Self {
        Self {
            module_path: module_path.into(),
            output_path: None,
            layout,
            dependencies: Dependencies::default(),
            checksum,
        }
    }

    pub fn with_output_path(self, output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: Some(output_path.into()),
            ..self
        }
    }

    pub fn with_dependencies(self, dependencies: Dependencies) -> Self {
        Self {
            dependencies,
            ..self
        }
    }

    pub fn name(&self) -> String {
        module_name(&self.module_path)
    }

    /// Name of the generated project: the output directory's basename,
    /// falling back to the module name for transient modules.
    pub fn project_name(&self) -> String {
        self.output_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name())
    }

    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn layout(&self) -> &ModuleLayout {
        &self.layout
    }

    pub fn checksum(&self) -> Option<&Checksum> {
        self.checksum.as_ref()
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    pub fn jar_dependencies(&self) -> impl Iterator<Item = &JarDependency> {
        self.dependencies.jars().iter()
    }

    pub fn module_dependencies(&self) -> &[ModuleDependency] {
        self.dependencies.modules()
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.module_path == other.module_path
            && self.layout == other.layout
            && self.checksum == other.checksum
    }
}

impl Eq for Module {}
