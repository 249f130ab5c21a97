//! Scan Use Case
//!
//! Orchestrates discovery, classification and regeneration for one source tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{module_name, Module};
use crate::domain::ports::{
    BuildCollaborator, DescriptorContext, DescriptorGenerator, FileSystem, ModuleDependencySource,
    ModuleStore, NoDeclaredDependencies, ScanEvent, ScanEventSink,
};
use crate::domain::services::{
    normalize_module_root, portal_lib_jars, project_names, Classification, DependencyResolver,
    DiscoveryWalker, ModuleIdentity, PathResolver, PlannedModule, Planner, ScanPlan, StaleOutput,
};
use crate::error::PortalResult;

use super::options::ScanOptions;
use super::result::{FailureStage, ModuleFailure, ModuleOutcome, RemovedModule, ScanReport};

/// Scan use case - incremental regeneration of module outputs
pub struct ScanUseCase<F, S, C, G>
where
    F: FileSystem,
    S: ModuleStore,
    C: BuildCollaborator,
    G: DescriptorGenerator,
{
    fs: F,
    store: S,
    collaborator: C,
    generator: G,
    declared: Box<dyn ModuleDependencySource>,
    cancel: Arc<AtomicBool>,
}

impl<F, S, C, G> ScanUseCase<F, S, C, G>
where
    F: FileSystem,
    S: ModuleStore,
    C: BuildCollaborator,
    G: DescriptorGenerator,
{
    pub fn new(fs: F, store: S, collaborator: C, generator: G) -> Self {
        Self {
            fs,
            store,
            collaborator,
            generator,
            declared: Box::new(NoDeclaredDependencies),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Source of declared module-to-module references
    pub fn with_declared_dependencies(mut self, declared: Box<dyn ModuleDependencySource>) -> Self {
        self.declared = declared;
        self
    }

    /// Flag checked between modules; once set the scan stops early
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Run both phases for one source tree.
    ///
    /// Only an unreadable source root or a failing store clear aborts the run;
    /// per-module failures are collected in the report.
    pub fn execute(
        &self,
        options: &ScanOptions,
        event_sink: Arc<dyn ScanEventSink>,
    ) -> PortalResult<ScanReport> {
        let mut report = ScanReport::new(&options.portal_root, &options.project_root);
        report.dry_run = options.dry_run;

        let snapshot = self.load_snapshot(options, &mut report)?;

        event_sink.on_event(ScanEvent::Started {
            portal_root: options.portal_root.clone(),
            project_root: options.project_root.clone(),
            known_modules: snapshot.len(),
            dry_run: options.dry_run,
        });

        let plan = self.plan(options, &snapshot, &mut report, &event_sink)?;

        for planned in &plan.modules {
            report
                .modules
                .link(&planned.discovered_root, planned.module.clone());
            if planned.classification == Classification::Unchanged {
                report.unchanged.push(outcome(planned));
            }
        }
        for name in report.modules.duplicate_names() {
            debug!(module = %name, "module name found under several parents; project names qualified");
        }

        let stale = if report.interrupted {
            Vec::new()
        } else {
            plan.stale_outputs(&snapshot)
        };

        if options.dry_run {
            report.removed = stale
                .iter()
                .filter(|s| s.removed)
                .map(removed_module)
                .collect();
            report.processed = plan.to_process().map(outcome).collect();
        } else if !report.interrupted {
            self.retire(&stale, &mut report, &event_sink);
            self.execute_plan(options, &plan, &mut report, &event_sink);
            if report.has_changes() {
                let settings = self
                    .generator
                    .generate_settings(&options.project_root, &report.modules)?;
                debug!(path = %settings.display(), "project settings written");
                report.settings_path = Some(settings);
            }
        }

        event_sink.on_event(ScanEvent::Completed {
            unchanged: report.count(Classification::Unchanged),
            new: report.count(Classification::New),
            changed: report.count(Classification::Changed),
            removed: report.removed.len(),
            failed: report.failures.len(),
            interrupted: report.interrupted,
        });

        Ok(report)
    }

    fn load_snapshot(
        &self,
        options: &ScanOptions,
        report: &mut ScanReport,
    ) -> PortalResult<BTreeMap<PathBuf, Module>> {
        if !options.full {
            return Ok(self.store.load(&options.project_root));
        }
        if !options.dry_run {
            report.cleared = self.store.clear(&options.project_root)?;
            info!(cleared = report.cleared, "full rebuild: dropped all module records");
        }
        Ok(BTreeMap::new())
    }

    /// Phase 1: walk the whole tree, name every module, then classify each
    /// against the snapshot.
    fn plan(
        &self,
        options: &ScanOptions,
        snapshot: &BTreeMap<PathBuf, Module>,
        report: &mut ScanReport,
        event_sink: &Arc<dyn ScanEventSink>,
    ) -> PortalResult<ScanPlan> {
        let walker = DiscoveryWalker::new(&self.fs, &options.excluded);
        let identity = ModuleIdentity::new(&self.fs, options.fingerprint_file.clone());
        let resolver = PathResolver::new(&self.fs);
        let mut plan = ScanPlan::new();

        let mut discovered = Vec::new();
        for root in walker.walk(&options.portal_root)? {
            if self.cancelled() {
                report.interrupted = true;
                return Ok(plan);
            }
            discovered.push(root);
        }
        let module_paths: Vec<PathBuf> = discovered
            .iter()
            .map(|root| normalize_module_root(root))
            .collect();
        let names = project_names(&options.portal_root, &module_paths);

        for (discovered, module_path) in discovered.into_iter().zip(module_paths) {
            if self.cancelled() {
                report.interrupted = true;
                break;
            }
            plan.mark_discovered(&module_path);
            let name = module_name(&module_path);

            let checksum = match identity.module_checksum(&module_path) {
                Ok(checksum) => checksum,
                Err(error) => {
                    self.record_failure(
                        report,
                        event_sink,
                        &module_path,
                        FailureStage::Fingerprint,
                        error.to_string(),
                    );
                    continue;
                }
            };

            let layout = resolver.resolve_layout(&module_path);
            let project_name = names.get(&module_path).map_or(name.as_str(), String::as_str);
            let output_path = self.store.output_path_for(&options.project_root, project_name);
            let fresh = Module::new(module_path.clone(), layout, checksum)
                .with_output_path(output_path);
            let classification =
                Planner::classify(snapshot.get(&module_path), &fresh, options.missing_fingerprint);

            info!(module = %name, %classification, "classified");
            if event_sink.wants_detailed_events() {
                event_sink.on_event(ScanEvent::Classified {
                    module_path: module_path.clone(),
                    name,
                    classification,
                });
            }
            plan.add(PlannedModule::new(discovered, fresh, classification));
        }

        Ok(plan)
    }

    /// Delete outputs of vanished modules and old locations of moved ones.
    fn retire(
        &self,
        stale: &[StaleOutput],
        report: &mut ScanReport,
        event_sink: &Arc<dyn ScanEventSink>,
    ) {
        for output in stale {
            if let Err(error) = self.store.remove(&output.output_path) {
                self.record_failure(
                    report,
                    event_sink,
                    &output.module_path,
                    FailureStage::Store,
                    error.to_string(),
                );
                continue;
            }
            if !output.removed {
                debug!(path = %output.output_path.display(), "previous output location dropped");
                continue;
            }
            let removed = removed_module(output);
            info!(module = %removed.name, "no longer in the source tree; output removed");
            event_sink.on_event(ScanEvent::Removed {
                module_path: removed.module_path.clone(),
                name: removed.name.clone(),
                output_path: removed.output_path.clone(),
            });
            report.removed.push(removed);
        }
    }

    /// Phase 2: regenerate New and Changed modules.
    fn execute_plan(
        &self,
        options: &ScanOptions,
        plan: &ScanPlan,
        report: &mut ScanReport,
        event_sink: &Arc<dyn ScanEventSink>,
    ) {
        if plan.to_process().next().is_none() {
            return;
        }
        let resolver = DependencyResolver::new(
            &self.fs,
            &self.collaborator,
            self.declared.as_ref(),
            &options.portal_root,
        )
        .with_descriptor_file(options.descriptor_file.clone())
        .with_display_output(options.display_build_output);
        let context = DescriptorContext {
            portal_root: options.portal_root.clone(),
            exclude_types: options.exclude_types.clone(),
            portal_lib_jars: portal_lib_jars(
                &self.fs,
                &options.portal_root,
                &options.portal_lib_dirs,
            ),
            modules: report.modules.clone(),
        };
        debug!(count = context.portal_lib_jars.len(), "portal libraries collected");

        for planned in plan.to_process() {
            if self.cancelled() {
                report.interrupted = true;
                break;
            }
            let module_path = planned.module.module_path();
            match self.process(&planned.module, &resolver, &context) {
                Ok(module) => {
                    let name = module.name();
                    info!(module = %name, classification = %planned.classification, "regenerated");
                    event_sink.on_event(ScanEvent::Processed {
                        name,
                        output_path: module.output_path().map(Path::to_path_buf).unwrap_or_default(),
                        jar_count: module.dependencies().jars().len(),
                        module_dependency_count: module.module_dependencies().len(),
                    });
                    report.modules.link(&planned.discovered_root, module);
                    report.processed.push(outcome(planned));
                }
                Err((stage, error)) => {
                    self.record_failure(report, event_sink, module_path, stage, error);
                }
            }
        }
    }

    /// Resolve, then delete and regenerate one module's output.
    ///
    /// The record is written last: a module interrupted midway has no record
    /// and is treated as New next time.
    fn process(
        &self,
        module: &Module,
        resolver: &DependencyResolver<'_>,
        context: &DescriptorContext,
    ) -> Result<Module, (FailureStage, String)> {
        let dependencies = resolver
            .resolve(module.module_path())
            .map_err(|e| (FailureStage::Dependencies, e.to_string()))?;
        let module = module.clone().with_dependencies(dependencies);

        if let Some(output) = module.output_path() {
            self.store
                .remove(output)
                .map_err(|e| (FailureStage::Store, e.to_string()))?;
        }
        self.generator
            .generate(&module, context)
            .map_err(|e| (FailureStage::Descriptor, e.to_string()))?;
        self.store
            .save(&module)
            .map_err(|e| (FailureStage::Store, e.to_string()))?;
        Ok(module)
    }

    fn record_failure(
        &self,
        report: &mut ScanReport,
        event_sink: &Arc<dyn ScanEventSink>,
        module_path: &Path,
        stage: FailureStage,
        error: String,
    ) {
        let name = module_name(module_path);
        warn!(module = %name, %stage, %error, "module failed");
        event_sink.on_event(ScanEvent::Failed {
            module_path: module_path.to_path_buf(),
            name: name.clone(),
            error: error.clone(),
        });
        report.failures.push(ModuleFailure {
            module_path: module_path.to_path_buf(),
            name,
            stage,
            error,
        });
    }
}

fn outcome(planned: &PlannedModule) -> ModuleOutcome {
    ModuleOutcome {
        name: planned.module.name(),
        module_path: planned.module.module_path().to_path_buf(),
        classification: planned.classification,
        output_path: planned
            .module
            .output_path()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    }
}

fn removed_module(stale: &StaleOutput) -> RemovedModule {
    RemovedModule {
        name: module_name(&stale.module_path),
        module_path: stale.module_path.clone(),
        output_path: stale.output_path.clone(),
    }
}
