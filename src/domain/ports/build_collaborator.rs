//! BuildCollaborator port - external resolution of archive dependencies
//!
//! The collaborator is a black box: given a module it returns, per module
//! name, the archives it resolved. Retry and timeout policy belong to the
//! implementation, never to the caller.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Module name → ordered archive paths
pub type ResolvedArchives = BTreeMap<String, Vec<PathBuf>>;

/// Collaborator failures
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The external process could not be started
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The external process ran but reported failure
    #[error("'{command}' exited with {}: {stderr}", .code.map(|c| c.to_string()).unwrap_or_else(|| "a signal".to_string()))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// External dependency resolver
pub trait BuildCollaborator {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Resolve archives for the module at `module_path` inside `project_root`.
    fn resolve(
        &self,
        module_path: &Path,
        project_root: &Path,
        display_output: bool,
    ) -> Result<ResolvedArchives, CollaboratorError>;
}
