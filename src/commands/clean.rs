//! Clean command handler
//!
//! Removes generated module outputs for every target.

use anyhow::Result;
use serde_json::json;

use portalmod::application::{CleanOptions, CleanUseCase};
use portalmod::infrastructure::{LocalFs, PropertiesModuleStore, RunLock};

use super::Target;

pub fn cmd_clean(targets: &[Target], dry_run: bool, json: bool) -> Result<()> {
    let use_case = CleanUseCase::new(PropertiesModuleStore::new(), LocalFs::new());

    for target in targets {
        let _lock = if dry_run {
            None
        } else {
            Some(RunLock::acquire(&target.project_dir)?)
        };
        let result = use_case.execute(&CleanOptions::new(&target.project_dir).with_dry_run(dry_run))?;

        if json {
            let event = json!({
                "event": "clean",
                "command": "clean",
                "project_root": result.project_root.display().to_string(),
                "dry_run": result.dry_run,
                "outputs": result.outputs.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                "removed": result.removed,
                "settings": result.settings.as_ref().map(|p| p.display().to_string()),
            });
            println!("{event}");
            continue;
        }

        if result.is_empty() {
            println!("Nothing to clean in {}", result.project_root.display());
            continue;
        }
        let verb = if dry_run { "Would remove" } else { "Removing" };
        println!("{} {} module outputs in {}", verb, result.outputs.len(), result.project_root.display());
        for output in &result.outputs {
            println!("  {}", output.display());
        }
        if let Some(settings) = &result.settings {
            println!("  {}", settings.display());
        }
        if !dry_run {
            println!("{} directories removed", result.removed);
        }
    }
    Ok(())
}
