//! Properties Module Store
//!
//! Implements the ModuleStore port with one `module-info.properties` record
//! per module output directory:
//!
//! ```text
//! <output_root>/modules/<name>/module-info.properties
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::{Module, ModuleLayout};
use crate::domain::ports::{FileSystem, ModuleStore, StoreError, StoreResult, MODULES_DIR};
use crate::domain::value_objects::{Checksum, PathKind, ResourceSet};
use crate::infrastructure::fs::LocalFs;

use super::properties::{decode_latin1, parse, render, Properties};

/// Record file name inside a module output directory
pub const RECORD_FILE: &str = "module-info.properties";

pub const KEY_MODULE_PATH: &str = "module.path";
pub const KEY_CHECKSUM: &str = "checksum";

/// Record key for each resolved directory role
pub fn record_key(kind: PathKind) -> &'static str {
    match kind {
        PathKind::Source => "source.path",
        PathKind::Resource(ResourceSet::Main) => "source.resource.path",
        PathKind::TestUnit => "test.unit.path",
        PathKind::Resource(ResourceSet::Test) => "test.unit.resource.path",
        PathKind::TestIntegration => "test.integration.path",
        PathKind::Resource(ResourceSet::TestIntegration) => "test.integration.resource.path",
    }
}

fn path_text(path: &Path) -> StoreResult<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| StoreError::NonUtf8Path {
            path: path.to_path_buf(),
        })
}

/// Properties document for a module; absent values are omitted.
pub fn to_properties(module: &Module) -> StoreResult<Properties> {
    let mut props = Properties::new();
    props.insert(KEY_MODULE_PATH.to_string(), path_text(module.module_path())?);
    for (kind, path) in module.layout().resolved() {
        props.insert(record_key(kind).to_string(), path_text(path)?);
    }
    if let Some(checksum) = module.checksum() {
        props.insert(KEY_CHECKSUM.to_string(), checksum.as_str().to_string());
    }
    Ok(props)
}

/// Rebuild a module from its record. `None` without `module.path`.
pub fn from_properties(props: &Properties, output_path: &Path) -> Option<Module> {
    let module_path = props.get(KEY_MODULE_PATH).filter(|p| !p.is_empty())?;

    let mut layout = ModuleLayout::default();
    for kind in PathKind::ALL {
        let path = props
            .get(record_key(kind))
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        layout.set(kind, path);
    }
    let checksum = props
        .get(KEY_CHECKSUM)
        .filter(|c| !c.is_empty())
        .map(|c| Checksum::new(c));

    Some(Module::new(module_path, layout, checksum).with_output_path(output_path))
}

/// Module store backed by properties files
pub struct PropertiesModuleStore<F: FileSystem = LocalFs> {
    fs: F,
}

impl PropertiesModuleStore<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for PropertiesModuleStore<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> PropertiesModuleStore<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Read one record; every failure is reported and treated as no record.
    fn read_record(&self, output_path: &Path) -> Option<Module> {
        let record = output_path.join(RECORD_FILE);
        if !self.fs.exists(&record) {
            debug!(path = %record.display(), "no module record");
            return None;
        }
        let bytes = match self.fs.read(&record) {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!(path = %record.display(), %error, "unreadable module record; treating as new");
                return None;
            }
        };
        let props = match parse(&decode_latin1(&bytes)) {
            Ok(props) => props,
            Err(error) => {
                warn!(path = %record.display(), %error, "malformed module record; treating as new");
                return None;
            }
        };
        let module = from_properties(&props, output_path);
        match &module {
            None => {
                warn!(path = %record.display(), "module record has no {KEY_MODULE_PATH}; treating as new")
            }
            Some(m) if m.checksum().is_some_and(Checksum::is_legacy) => {
                debug!(path = %record.display(), "record checksum from an older algorithm")
            }
            Some(_) => {}
        }
        module
    }
}

impl<F: FileSystem> ModuleStore for PropertiesModuleStore<F> {
    fn load(&self, output_root: &Path) -> BTreeMap<PathBuf, Module> {
        let modules_dir = output_root.join(MODULES_DIR);
        let mut records = BTreeMap::new();
        if !self.fs.is_dir(&modules_dir) {
            debug!(path = %modules_dir.display(), "no module records yet");
            return records;
        }

        let entries = match self.fs.read_dir(&modules_dir) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %modules_dir.display(), %error, "cannot list module records");
                return records;
            }
        };

        for entry in entries.into_iter().filter(|e| e.is_dir()) {
            if let Some(module) = self.read_record(&entry.path) {
                let key = module.module_path().to_path_buf();
                if let Some(previous) = records.insert(key, module) {
                    warn!(
                        module = %previous.module_path().display(),
                        "several records point at the same module; keeping the last"
                    );
                }
            }
        }
        debug!(count = records.len(), root = %output_root.display(), "loaded module records");
        records
    }

    fn save(&self, module: &Module) -> StoreResult<()> {
        let output_path = module
            .output_path()
            .ok_or_else(|| StoreError::MissingOutputPath {
                module: module.module_path().to_path_buf(),
            })?;
        let header = Utc::now().format("%a %b %d %H:%M:%S UTC %Y").to_string();
        let content = render(&to_properties(module)?, Some(&header));
        self.fs
            .write_atomic(&output_path.join(RECORD_FILE), content.as_bytes())?;
        Ok(())
    }

    fn remove(&self, output_path: &Path) -> StoreResult<()> {
        self.fs.remove_dir_all(output_path)?;
        Ok(())
    }

    fn clear(&self, output_root: &Path) -> StoreResult<usize> {
        let modules_dir = output_root.join(MODULES_DIR);
        if !self.fs.is_dir(&modules_dir) {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in self.fs.read_dir(&modules_dir)? {
            if entry.is_dir() {
                self.fs.remove_dir_all(&entry.path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
