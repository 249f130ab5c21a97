//! Declared module dependencies from a properties file
//!
//! ```text
//! blogs-web=blogs-api,comments-api
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::ModuleDependency;
use crate::domain::ports::{FileSystem, ModuleDependencySource};

use super::properties::{decode_latin1, parse, Properties};

/// Default declared-dependency file name
pub const DEFAULT_DEPENDENCY_FILE: &str = "project-dependency.properties";

#[derive(Debug, Clone, Default)]
pub struct PropertiesDependencySource {
    declared: BTreeMap<String, Vec<ModuleDependency>>,
}

impl PropertiesDependencySource {
    pub fn from_properties(props: &Properties) -> Self {
        let declared = props
            .iter()
            .map(|(module, list)| {
                let mut deps: Vec<ModuleDependency> = Vec::new();
                for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                    if !deps.iter().any(|d| d.name() == name) {
                        deps.push(ModuleDependency::new(name));
                    }
                }
                (module.clone(), deps)
            })
            .collect();
        Self { declared }
    }

    /// Load `path`; a missing or unreadable file declares nothing.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Self {
        if !fs.exists(path) {
            debug!(path = %path.display(), "no declared dependency file");
            return Self::default();
        }
        let parsed = fs
            .read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| parse(&decode_latin1(&bytes)).map_err(|e| e.to_string()));
        match parsed {
            Ok(props) => Self::from_properties(&props),
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring declared dependency file");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

impl ModuleDependencySource for PropertiesDependencySource {
    fn declared_for(&self, module_name: &str) -> Vec<ModuleDependency> {
        self.declared.get(module_name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use tempfile::tempdir;

    #[test]
    fn comma_lists_are_trimmed_and_deduplicated() {
        let props = parse("blogs-web = blogs-api, comments-api ,,blogs-api\n").unwrap();
        let source = PropertiesDependencySource::from_properties(&props);

        let names: Vec<_> = source
            .declared_for("blogs-web")
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["blogs-api", "comments-api"]);
        assert!(source.declared_for("unknown").is_empty());
    }

    #[test]
    fn missing_file_declares_nothing() {
        let dir = tempdir().unwrap();
        let source =
            PropertiesDependencySource::load(&LocalFs::new(), &dir.path().join(DEFAULT_DEPENDENCY_FILE));
        assert!(source.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_DEPENDENCY_FILE);
        std::fs::write(&path, "# declared\nwiki=kernel\n").unwrap();

        let source = PropertiesDependencySource::load(&LocalFs::new(), &path);
        assert_eq!(source.len(), 1);
        assert_eq!(source.declared_for("wiki")[0].name(), "kernel");
    }
}
