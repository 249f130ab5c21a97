//! Error types for portalmod
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CollaboratorError, DescriptorError, FsError, StoreError};

/// Result type alias for portalmod operations
pub type PortalResult<T> = Result<T, PortalError>;

/// Main error type for portalmod operations
#[derive(Error, Debug)]
pub enum PortalError {
    /// The source tree root could not be listed at all
    #[error("cannot read source root {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The fingerprint file exists but could not be read
    #[error("cannot read fingerprint file {path}: {source}")]
    Fingerprint {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Listing archives in a module's library directory failed
    #[error("cannot list bundled archives in {path}: {source}")]
    BundledArchives {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Module record persistence failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The external build collaborator failed for one module
    #[error("dependency resolution failed for module '{module}': {source}")]
    Collaborator {
        module: String,
        #[source]
        source: CollaboratorError,
    },

    /// Writing a generated build descriptor failed
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Generic file system failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration file given explicitly does not exist
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A required setting is missing from all configuration sources
    #[error("missing required setting '{key}'")]
    MissingSetting { key: String },

    /// Another run holds the project lock
    #[error("another portalmod run is already using {path}")]
    Locked { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
