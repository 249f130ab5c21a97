//! Clean Use Case
//!
//! Deletes module output directories and the project settings file.

use tracing::{debug, info};

use crate::domain::ports::{FileSystem, ModuleStore};
use crate::error::PortalResult;

use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - drops all module records and their outputs
pub struct CleanUseCase<S, F>
where
    S: ModuleStore,
    F: FileSystem,
{
    store: S,
    fs: F,
}

impl<S, F> CleanUseCase<S, F>
where
    S: ModuleStore,
    F: FileSystem,
{
    pub fn new(store: S, fs: F) -> Self {
        Self { store, fs }
    }

    /// Remove outputs, or only list them when `dry_run` is set.
    ///
    /// Output directories without a readable record are still removed; they
    /// only show up in `removed`, not in `outputs`.
    pub fn execute(&self, options: &CleanOptions) -> PortalResult<CleanResult> {
        let mut result = CleanResult::new(&options.project_root);
        result.dry_run = options.dry_run;

        result.outputs = self
            .store
            .load(&options.project_root)
            .into_values()
            .filter_map(|module| module.output_path().map(|p| p.to_path_buf()))
            .collect();
        result.outputs.sort();

        let settings = options.project_root.join(&options.settings_file);
        if self.fs.exists(&settings) {
            result.settings = Some(settings.clone());
        }

        if options.dry_run {
            debug!(outputs = result.outputs.len(), "dry run: nothing removed");
            return Ok(result);
        }

        result.removed = self.store.clear(&options.project_root)?;
        if result.settings.is_some() {
            self.fs.remove_file(&settings)?;
        }
        info!(
            removed = result.removed,
            root = %options.project_root.display(),
            "module outputs removed"
        );
        Ok(result)
    }
}
