//! Module map - modules grouped by their logical parent directory
//!
//! Built while discovery proceeds and handed back to the caller once the
//! walk is done. Module dependencies are resolved against it by name.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::module::Module;

const DOCROOT_DIR: &str = "docroot";

/// Logical parent of a discovered root.
///
/// A root found under a `docroot` directory (legacy `docroot/WEB-INF` layout)
/// belongs to the directory two levels above `docroot`.
pub fn logical_parent(discovered_root: &Path) -> Option<PathBuf> {
    let parent = discovered_root.parent()?;
    if parent.file_name().is_some_and(|n| n == DOCROOT_DIR) {
        return parent.parent().and_then(Path::parent).map(Path::to_path_buf);
    }
    Some(parent.to_path_buf())
}

/// Parent directory → module name → module
#[derive(Debug, Clone, Default)]
pub struct ModuleMap {
    buckets: BTreeMap<PathBuf, BTreeMap<String, Module>>,
}

impl ModuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link a module under the logical parent of the root it was discovered at.
    ///
    /// Returns the module previously stored under the same parent and name.
    pub fn link(&mut self, discovered_root: &Path, module: Module) -> Option<Module> {
        let parent = logical_parent(discovered_root).unwrap_or_default();
        self.insert(parent, module)
    }

    /// Insert under an explicit parent path.
    pub fn insert(&mut self, parent: PathBuf, module: Module) -> Option<Module> {
        self.buckets
            .entry(parent)
            .or_default()
            .insert(module.name(), module)
    }

    /// First module with this name, in parent order.
    pub fn lookup(&self, name: &str) -> Option<&Module> {
        self.buckets.values().find_map(|bucket| bucket.get(name))
    }

    pub fn modules_in(&self, parent: &Path) -> Option<&BTreeMap<String, Module>> {
        self.buckets.get(parent)
    }

    pub fn parents(&self) -> impl Iterator<Item = &Path> {
        self.buckets.keys().map(|p| p.as_path())
    }

    /// All modules as `(parent, module)` in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Module)> {
        self.buckets
            .iter()
            .flat_map(|(parent, bucket)| bucket.values().map(move |m| (parent.as_path(), m)))
    }

    /// Names that occur under more than one parent.
    pub fn duplicate_names(&self) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for bucket in self.buckets.values() {
            for name in bucket.keys() {
                if !seen.insert(name.clone()) {
                    duplicates.insert(name.clone());
                }
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
