//! Advisory run lock on the output project root
//!
//! Two runs against the same output root would interleave deletes and
//! writes. The lock file is held for the lifetime of `RunLock`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{PortalError, PortalResult};

/// Lock file name inside the output project root
pub const LOCK_FILE: &str = ".portalmod.lock";

#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    /// Take the lock without waiting. A held lock is `PortalError::Locked`.
    pub fn acquire(project_root: &Path) -> PortalResult<Self> {
        fs::create_dir_all(project_root)?;
        let path = project_root.join(LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        match FileExt::try_lock_exclusive(&file) {
            Ok(()) => Ok(Self { file, path }),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Err(PortalError::Locked { path }),
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(PortalError::Locked { path })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
