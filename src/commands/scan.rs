//! Scan and plan command handlers

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use portalmod::application::{ScanOptions, ScanReport, ScanUseCase};
use portalmod::config::Config;
use portalmod::domain::ports::{BuildCollaborator, ScanEventSink};
use portalmod::infrastructure::{
    ConsoleEventSink, GradleCollaborator, GradleDescriptorWriter, JsonEventSink, LocalFs,
    NoopCollaborator, PropertiesDependencySource, PropertiesModuleStore, RunLock,
};

use super::Target;

/// Run a scan (or a dry-run plan) over every target.
///
/// Returns `false` when any module failed or the run was interrupted.
pub fn cmd_scan(
    config: &Config,
    targets: &[Target],
    full: bool,
    dry_run: bool,
    json: bool,
    cancel: Arc<AtomicBool>,
) -> Result<bool> {
    let command = if dry_run { "plan" } else { "scan" };
    let sink: Arc<dyn ScanEventSink> = if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stdout())
    };

    let mut success = true;
    for target in targets {
        let report = if config.build.enabled {
            let collaborator = GradleCollaborator::new().with_command(config.build.command.clone());
            run_target(config, target, full, dry_run, collaborator, &sink, &cancel)?
        } else {
            run_target(config, target, full, dry_run, NoopCollaborator, &sink, &cancel)?
        };

        for failure in &report.failures {
            error!(module = %failure.name, stage = %failure.stage, "{}", failure.error);
        }
        success &= report.is_success();
        if report.interrupted {
            info!("interrupted; remaining source trees skipped");
            break;
        }
    }
    Ok(success)
}

fn run_target<C: BuildCollaborator>(
    config: &Config,
    target: &Target,
    full: bool,
    dry_run: bool,
    collaborator: C,
    sink: &Arc<dyn ScanEventSink>,
    cancel: &Arc<AtomicBool>,
) -> Result<ScanReport> {
    let _lock = if dry_run {
        None
    } else {
        Some(RunLock::acquire(&target.project_dir)?)
    };

    let fs = LocalFs::new();
    let declared = PropertiesDependencySource::load(&fs, &config.dependency_file());
    let options = ScanOptions::new(&target.portal_dir, &target.project_dir)
        .with_excluded(config.exclusions())
        .with_fingerprint_file(config.scan.fingerprint_file.clone())
        .with_descriptor_file(config.build.descriptor_file.clone())
        .with_missing_fingerprint(config.scan.missing_fingerprint)
        .with_display_build_output(config.build.display_output)
        .with_exclude_types(config.descriptor.exclude_types.clone())
        .with_portal_lib_dirs(config.descriptor.portal_lib_dirs.clone())
        .with_full(full)
        .with_dry_run(dry_run);

    let use_case = ScanUseCase::new(
        fs,
        PropertiesModuleStore::new(),
        collaborator,
        GradleDescriptorWriter::new(),
    )
    .with_declared_dependencies(Box::new(declared))
    .with_cancel_flag(Arc::clone(cancel));

    Ok(use_case.execute(&options, Arc::clone(sink))?)
}
