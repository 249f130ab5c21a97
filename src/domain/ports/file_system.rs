//! FileSystem port - abstraction over file I/O operations
//!
//! Domain services inspect the source tree and write output only through this
//! trait, so they can be exercised against any implementation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while touching `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// What a directory entry points at (symlinks are followed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Abstract file system interface
pub trait FileSystem {
    /// Check if anything exists at the path
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is a directory (following symlinks)
    fn is_dir(&self, path: &Path) -> bool;

    /// Read raw file bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// List the children of a directory, sorted by path
    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Resolve symlinks and relative components
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;

    /// Write content atomically, creating parent directories
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory tree; a missing directory is not an error
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove one file; a missing file is not an error
    fn remove_file(&self, path: &Path) -> FsResult<()>;
}
