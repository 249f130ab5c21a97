//! ModuleDependencySource port - declared module-to-module references

use crate::domain::entities::ModuleDependency;

/// Source of declared cross-module references, by module name.
pub trait ModuleDependencySource {
    /// Modules the named module declares a dependency on, in declared order.
    fn declared_for(&self, module_name: &str) -> Vec<ModuleDependency>;
}

/// A source that declares nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeclaredDependencies;

impl ModuleDependencySource for NoDeclaredDependencies {
    fn declared_for(&self, _module_name: &str) -> Vec<ModuleDependency> {
        Vec::new()
    }
}
