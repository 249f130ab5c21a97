//! Collaborator used when external resolution is switched off

use std::path::Path;

use crate::domain::ports::{BuildCollaborator, CollaboratorError, ResolvedArchives};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollaborator;

impl BuildCollaborator for NoopCollaborator {
    fn name(&self) -> &'static str {
        "none"
    }

    fn resolve(
        &self,
        _module_path: &Path,
        _project_root: &Path,
        _display_output: bool,
    ) -> Result<ResolvedArchives, CollaboratorError> {
        Ok(ResolvedArchives::new())
    }
}
