//! Dependency references held by a module

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Reference to one external archive file.
///
/// Identity is the archive path plus the `bundled` flag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JarDependency {
    path: PathBuf,
    bundled: bool,
}

impl JarDependency {
    pub fn new(path: impl Into<PathBuf>, bundled: bool) -> Self {
        Self {
            path: path.into(),
            bundled,
        }
    }

    /// Archive stored inside the module's own library directory
    pub fn bundled(path: impl Into<PathBuf>) -> Self {
        Self::new(path, true)
    }

    /// Archive resolved by the build collaborator
    pub fn external(path: impl Into<PathBuf>) -> Self {
        Self::new(path, false)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_bundled(&self) -> bool {
        self.bundled
    }
}

/// Named reference to another in-tree module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleDependency {
    name: String,
}

impl ModuleDependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A module's full dependency set, recomputed on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    jars: BTreeSet<JarDependency>,
    modules: Vec<ModuleDependency>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_jar(&mut self, jar: JarDependency) {
        self.jars.insert(jar);
    }

    /// Append a module reference, keeping first-seen order and dropping repeats.
    pub fn add_module(&mut self, dependency: ModuleDependency) {
        if !self.modules.contains(&dependency) {
            self.modules.push(dependency);
        }
    }

    pub fn jars(&self) -> &BTreeSet<JarDependency> {
        &self.jars
    }

    pub fn modules(&self) -> &[ModuleDependency] {
        &self.modules
    }

    pub fn bundled_jars(&self) -> impl Iterator<Item = &JarDependency> {
        self.jars.iter().filter(|j| j.is_bundled())
    }

    pub fn external_jars(&self) -> impl Iterator<Item = &JarDependency> {
        self.jars.iter().filter(|j| !j.is_bundled())
    }

    pub fn is_empty(&self) -> bool {
        self.jars.is_empty() && self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_different_origin_are_distinct() {
        let mut deps = Dependencies::new();
        deps.add_jar(JarDependency::bundled("/m/lib/x.jar"));
        deps.add_jar(JarDependency::external("/m/lib/x.jar"));
        deps.add_jar(JarDependency::bundled("/m/lib/x.jar"));

        assert_eq!(deps.jars().len(), 2);
        assert_eq!(deps.bundled_jars().count(), 1);
        assert_eq!(deps.external_jars().count(), 1);
    }

    #[test]
    fn module_references_keep_order_without_repeats() {
        let mut deps = Dependencies::new();
        deps.add_module(ModuleDependency::new("portal-kernel"));
        deps.add_module(ModuleDependency::new("portal-impl"));
        deps.add_module(ModuleDependency::new("portal-kernel"));

        let names: Vec<_> = deps.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["portal-kernel", "portal-impl"]);
    }

    #[test]
    fn empty_by_default() {
        assert!(Dependencies::default().is_empty());
    }
}
