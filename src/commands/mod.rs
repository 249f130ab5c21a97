//! Command handlers for the portalmod binary

pub mod clean;
pub mod scan;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use portalmod::config::Config;

use crate::cli::TargetArgs;

/// One source tree and the output root it feeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub portal_dir: PathBuf,
    pub project_dir: PathBuf,
}

/// Load configuration, logging unknown keys.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (config, warnings) = Config::discover(path).context("loading configuration")?;
    for warning in warnings {
        let line = warning.line.map(|l| format!(":{l}")).unwrap_or_default();
        match warning.suggestion {
            Some(suggestion) => warn!(
                "{}{}: unknown key '{}' (did you mean '{}'?)",
                warning.file.display(),
                line,
                warning.key,
                suggestion
            ),
            None => warn!(
                "{}{}: unknown key '{}'",
                warning.file.display(),
                line,
                warning.key
            ),
        }
    }
    Ok(config)
}

/// Apply CLI overrides and expand every configured source tree.
pub fn resolve_targets(config: &mut Config, args: &TargetArgs) -> Result<Vec<Target>> {
    if let Some(dir) = &args.project_dir {
        config.project.dir = Some(dir.clone());
    }
    if !args.portal_dirs.is_empty() {
        config.project.portal_dirs = args.portal_dirs.clone();
    }

    config
        .portal_dirs()?
        .iter()
        .map(|portal_dir| {
            Ok(Target {
                portal_dir: portal_dir.clone(),
                project_dir: config.project_output(portal_dir)?,
            })
        })
        .collect()
}
