//! Dependency resolution for one module
//!
//! Three sources contribute:
//! - archives bundled under `<module>/lib`
//! - archives reported by the build collaborator (only when the module
//!   carries a build descriptor)
//! - module references, from the declared-dependency source and from
//!   `project(...)` references in the module's descriptor

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::{module_name, Dependencies, JarDependency, ModuleDependency};
use crate::domain::ports::{BuildCollaborator, DirEntry, FileSystem, ModuleDependencySource};
use crate::error::{PortalError, PortalResult};

/// Directory holding bundled archives
pub const LIB_DIR: &str = "lib";

/// Default build descriptor name
pub const DEFAULT_DESCRIPTOR_FILE: &str = "build.gradle";

/// Source-tree directories whose archives every module compiles against
pub const DEFAULT_PORTAL_LIB_DIRS: [&str; 3] = ["lib/development", "lib/global", "lib/portal"];

fn jar_files(entries: Vec<DirEntry>) -> impl Iterator<Item = PathBuf> {
    entries
        .into_iter()
        .filter(|entry| entry.is_file())
        .filter(|entry| entry.path.extension().is_some_and(|ext| ext == "jar"))
        .map(|entry| entry.path)
}

/// Archives directly under each portal library directory, sorted per
/// directory. Relative directories resolve against `portal_root`; missing
/// ones are skipped and unreadable ones logged.
pub fn portal_lib_jars(
    fs: &dyn FileSystem,
    portal_root: &Path,
    lib_dirs: &[PathBuf],
) -> Vec<PathBuf> {
    let mut jars = Vec::new();
    for dir in lib_dirs {
        let dir = portal_root.join(dir);
        if !fs.is_dir(&dir) {
            continue;
        }
        match fs.read_dir(&dir) {
            Ok(entries) => {
                let mut found: Vec<PathBuf> = jar_files(entries).collect();
                found.sort();
                jars.extend(found);
            }
            Err(error) => warn!(path = %dir.display(), %error, "cannot list portal libraries"),
        }
    }
    jars
}

pub struct DependencyResolver<'a> {
    fs: &'a dyn FileSystem,
    collaborator: &'a dyn BuildCollaborator,
    declared: &'a dyn ModuleDependencySource,
    portal_root: PathBuf,
    descriptor_file: String,
    display_output: bool,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        collaborator: &'a dyn BuildCollaborator,
        declared: &'a dyn ModuleDependencySource,
        portal_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            collaborator,
            declared,
            portal_root: portal_root.into(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            display_output: false,
        }
    }

    pub fn with_descriptor_file(mut self, name: impl Into<String>) -> Self {
        self.descriptor_file = name.into();
        self
    }

    pub fn with_display_output(mut self, display: bool) -> Self {
        self.display_output = display;
        self
    }

    /// Resolve everything the module at `module_path` depends on.
    pub fn resolve(&self, module_path: &Path) -> PortalResult<Dependencies> {
        let name = module_name(module_path);
        let mut deps = Dependencies::new();

        for jar in self.bundled_jars(module_path)? {
            deps.add_jar(jar);
        }

        let descriptor = module_path.join(&self.descriptor_file);
        let has_descriptor = self.fs.exists(&descriptor);

        if has_descriptor {
            let resolved = self
                .collaborator
                .resolve(module_path, &self.portal_root, self.display_output)
                .map_err(|source| PortalError::Collaborator {
                    module: name.clone(),
                    source,
                })?;
            match resolved.get(&name) {
                Some(archives) => {
                    for archive in archives {
                        deps.add_jar(JarDependency::external(archive.clone()));
                    }
                }
                None => debug!(
                    module = %name,
                    collaborator = self.collaborator.name(),
                    "no archives reported"
                ),
            }
        }

        for declared in self.declared.declared_for(&name) {
            if declared.name() != name {
                deps.add_module(declared);
            }
        }

        if has_descriptor {
            match self.fs.read_to_string(&descriptor) {
                Ok(content) => {
                    for reference in declared_project_references(&content) {
                        if reference != name {
                            deps.add_module(ModuleDependency::new(reference));
                        }
                    }
                }
                Err(error) => debug!(
                    path = %descriptor.display(),
                    %error,
                    "descriptor not readable as text; skipping project references"
                ),
            }
        }

        Ok(deps)
    }

    /// Regular `.jar` files directly under `<module>/lib`.
    pub fn bundled_jars(&self, module_path: &Path) -> PortalResult<Vec<JarDependency>> {
        let lib = module_path.join(LIB_DIR);
        if !self.fs.is_dir(&lib) {
            return Ok(Vec::new());
        }
        let entries = self
            .fs
            .read_dir(&lib)
            .map_err(|source| PortalError::BundledArchives {
                path: lib.clone(),
                source,
            })?;
        Ok(jar_files(entries).map(JarDependency::bundled).collect())
    }
}

/// Module names referenced as `project(':a:b')` in a build descriptor.
///
/// The last path segment names the module. Both quote styles and the
/// `path:` named argument are accepted. Comment lines are ignored.
pub fn declared_project_references(content: &str) -> Vec<String> {
    const CALL: &str = "project(";

    let mut names: Vec<String> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with('*') || trimmed.starts_with("/*") {
            continue;
        }

        let mut rest = line;
        while let Some(start) = rest.find(CALL) {
            rest = &rest[start + CALL.len()..];
            let mut arg = rest.trim_start();
            if let Some(named) = arg.strip_prefix("path:") {
                arg = named.trim_start();
            }
            let Some(quote) = arg.chars().next().filter(|c| *c == '\'' || *c == '"') else {
                continue;
            };
            let body = &arg[1..];
            let Some(end) = body.find(quote) else {
                continue;
            };
            let path = &body[..end];
            if let Some(name) = path.rsplit(':').next().filter(|n| !n.is_empty()) {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}
