//! Module identity - checksum of the fingerprint file

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Checksum;
use crate::error::{PortalError, PortalResult};

/// Default fingerprint file name
pub const DEFAULT_FINGERPRINT_FILE: &str = "build.gradle";

/// Computes module checksums from their fingerprint file
pub struct ModuleIdentity<'a> {
    fs: &'a dyn FileSystem,
    fingerprint_file: String,
}

impl<'a> ModuleIdentity<'a> {
    pub fn new(fs: &'a dyn FileSystem, fingerprint_file: impl Into<String>) -> Self {
        Self {
            fs,
            fingerprint_file: fingerprint_file.into(),
        }
    }

    pub fn fingerprint_path(&self, module_path: &Path) -> PathBuf {
        module_path.join(&self.fingerprint_file)
    }

    /// Checksum of the given file.
    ///
    /// `Ok(None)` when the file does not exist. A file that exists but cannot
    /// be read is an error: it points at a race or corruption.
    pub fn checksum(&self, fingerprint: &Path) -> PortalResult<Option<Checksum>> {
        if !self.fs.exists(fingerprint) {
            return Ok(None);
        }
        let bytes = self
            .fs
            .read(fingerprint)
            .map_err(|source| PortalError::Fingerprint {
                path: fingerprint.to_path_buf(),
                source,
            })?;
        Ok(Some(Checksum::from_bytes(&bytes)))
    }

    /// Checksum of the fingerprint file inside a module root.
    pub fn module_checksum(&self, module_path: &Path) -> PortalResult<Option<Checksum>> {
        self.checksum(&self.fingerprint_path(module_path))
    }
}
