//! Module layout resolution
//!
//! The source tree mixes several generations of directory layouts. For each
//! directory role the resolver tries a fixed, ordered list of candidates and
//! takes the first one present on disk. No candidate present means the role is
//! absent, which is a normal result.

use std::path::{Path, PathBuf};

use crate::domain::entities::ModuleLayout;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PathKind, ResourceSet};

const DOCROOT_DIR: &str = "docroot";
const WEB_INF_DIR: &str = "WEB-INF";
const SRC_DIR: &str = "src";

/// Subdirectories of `src` that mark the Maven-style convention.
const CONVENTION_DIRS: [&str; 3] = ["main", "test", "testIntegration"];

/// Map a discovered root to the module root that names the module.
///
/// Legacy web modules are discovered at `<module>/docroot/WEB-INF`; their
/// identity is the directory two levels up.
pub fn normalize_module_root(discovered_root: &Path) -> PathBuf {
    if discovered_root.file_name().is_some_and(|n| n == WEB_INF_DIR) {
        if let Some(root) = discovered_root.parent().and_then(Path::parent) {
            return root.to_path_buf();
        }
    }
    discovered_root.to_path_buf()
}

fn rel(parts: &[&str]) -> PathBuf {
    parts.iter().collect()
}

fn legacy(parts: &[&str]) -> PathBuf {
    let mut path = rel(&[DOCROOT_DIR, WEB_INF_DIR]);
    path.extend(parts);
    path
}

/// Ordered relative candidates for every role except `Source`.
fn candidates(kind: PathKind) -> Vec<PathBuf> {
    match kind {
        PathKind::Source => Vec::new(),
        PathKind::Resource(set) => {
            let parts = [SRC_DIR, set.dir_name(), "resources"];
            vec![rel(&parts), legacy(&parts)]
        }
        PathKind::TestUnit => vec![
            rel(&[SRC_DIR, "test", "java"]),
            legacy(&[SRC_DIR, "test", "java"]),
            rel(&["test", "unit"]),
            legacy(&["test", "unit"]),
        ],
        PathKind::TestIntegration => vec![
            rel(&[SRC_DIR, ResourceSet::TestIntegration.dir_name(), "java"]),
            legacy(&[SRC_DIR, ResourceSet::TestIntegration.dir_name(), "java"]),
            rel(&["test", "integration"]),
            legacy(&["test", "integration"]),
        ],
    }
}

/// Resolves a module's directories against the file system
pub struct PathResolver<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> PathResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Resolve one role for the module rooted at `module_path`.
    pub fn resolve(&self, module_path: &Path, kind: PathKind) -> Option<PathBuf> {
        match kind {
            PathKind::Source => self.resolve_source(module_path),
            _ => candidates(kind)
                .into_iter()
                .map(|candidate| module_path.join(candidate))
                .find(|path| self.fs.is_dir(path)),
        }
    }

    /// Resolve all six roles.
    pub fn resolve_layout(&self, module_path: &Path) -> ModuleLayout {
        let mut layout = ModuleLayout::default();
        for kind in PathKind::ALL {
            layout.set(kind, self.resolve(module_path, kind));
        }
        layout
    }

    fn resolve_source(&self, module_path: &Path) -> Option<PathBuf> {
        let main_java = module_path.join(rel(&[SRC_DIR, "main", "java"]));
        if self.fs.is_dir(&main_java) {
            return Some(main_java);
        }

        let web_inf = module_path.join(legacy(&[]));
        if self.fs.is_dir(&web_inf) {
            let legacy_src = web_inf.join(SRC_DIR);
            if self.fs.is_dir(&legacy_src) {
                return Some(legacy_src);
            }
        }

        let src = module_path.join(SRC_DIR);
        if !self.fs.is_dir(&src) {
            return None;
        }
        if CONVENTION_DIRS
            .iter()
            .any(|dir| self.fs.exists(&src.join(dir)))
        {
            return None;
        }
        Some(src)
    }
}
