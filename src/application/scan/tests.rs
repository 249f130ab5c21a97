//! Scan Use Case Tests

use super::*;
use crate::domain::ports::{
    BuildCollaborator, CollaboratorError, ModuleStore, ResolvedArchives, ScanEvent, ScanEventSink,
};
use crate::domain::services::Classification;
use crate::domain::value_objects::{ExclusionSet, MissingFingerprintPolicy};
use crate::error::PortalError;
use crate::infrastructure::descriptor::SETTINGS_FILE;
use crate::infrastructure::repositories::RECORD_FILE;
use crate::infrastructure::{GradleDescriptorWriter, LocalFs, PropertiesModuleStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Collaborator that reports one archive per module and counts calls
#[derive(Clone, Default)]
struct RecordingCollaborator {
    calls: Arc<AtomicUsize>,
    failing: Arc<Mutex<Vec<String>>>,
}

impl RecordingCollaborator {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail_for(&self, name: &str) {
        self.failing.lock().unwrap().push(name.to_string());
    }
}

impl BuildCollaborator for RecordingCollaborator {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn resolve(
        &self,
        module_path: &Path,
        _project_root: &Path,
        _display_output: bool,
    ) -> Result<ResolvedArchives, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = module_path.file_name().unwrap().to_string_lossy().to_string();
        if self.failing.lock().unwrap().contains(&name) {
            return Err(CollaboratorError::Failed {
                command: "gradle".to_string(),
                code: Some(1),
                stderr: "could not resolve".to_string(),
            });
        }
        let mut archives = ResolvedArchives::new();
        archives.insert(name.clone(), vec![PathBuf::from(format!("/cache/{name}.jar"))]);
        Ok(archives)
    }
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<ScanEvent>>,
}

impl ScanEventSink for RecordingSink {
    fn on_event(&self, event: ScanEvent) {
        self.events.lock().unwrap().push(event);
    }
}

struct Fixture {
    _dir: TempDir,
    portal: PathBuf,
    project: PathBuf,
    collaborator: RecordingCollaborator,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let portal = dir.path().join("portal");
        let project = dir.path().join("project");
        fs::create_dir_all(&portal).unwrap();
        Self {
            _dir: dir,
            portal,
            project,
            collaborator: RecordingCollaborator::default(),
        }
    }

    fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.portal.join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.portal.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(&self) -> ScanOptions {
        ScanOptions::new(&self.portal, &self.project)
    }

    fn use_case(
        &self,
    ) -> ScanUseCase<
        LocalFs,
        PropertiesModuleStore,
        RecordingCollaborator,
        GradleDescriptorWriter,
    > {
        ScanUseCase::new(
            LocalFs::new(),
            PropertiesModuleStore::new(),
            self.collaborator.clone(),
            GradleDescriptorWriter::new(),
        )
    }

    fn scan(&self, options: &ScanOptions) -> ScanReport {
        self.use_case()
            .execute(options, Arc::new(RecordingSink::default()))
            .unwrap()
    }

    fn output(&self, name: &str) -> PathBuf {
        self.project.join("modules").join(name)
    }
}

fn names(outcomes: &[ModuleOutcome]) -> Vec<&str> {
    outcomes.iter().map(|o| o.name.as_str()).collect()
}

#[test]
fn first_run_discovers_bundled_jar_without_fingerprint() {
    let fx = Fixture::new();
    fx.mkdir("moduleA/src/main/java");
    fx.write("moduleA/lib/x.jar", "");

    let report = fx.scan(&fx.options());

    assert_eq!(names(&report.processed), vec!["moduleA"]);
    assert_eq!(report.processed[0].classification, Classification::New);
    assert!(report.unchanged.is_empty());
    assert!(report.is_success());

    let module = report.modules.lookup("moduleA").unwrap();
    assert_eq!(
        module.layout().source.as_deref(),
        Some(fx.portal.join("moduleA/src/main/java").as_path())
    );
    assert!(module.checksum().is_none());
    let bundled: Vec<_> = module.dependencies().bundled_jars().collect();
    assert_eq!(bundled.len(), 1);
    assert_eq!(bundled[0].path(), fx.portal.join("moduleA/lib/x.jar"));

    assert_eq!(fx.collaborator.calls(), 0);
    assert!(fx.output("moduleA").join(RECORD_FILE).is_file());
    assert!(fx.output("moduleA").join("build.gradle").is_file());
    assert_eq!(report.settings_path, Some(fx.project.join(SETTINGS_FILE)));
}

#[test]
fn second_run_without_changes_is_unchanged() {
    let fx = Fixture::new();
    fx.mkdir("moduleA/src/main/java");
    fx.write("moduleA/lib/x.jar", "");
    fx.write("moduleB/build.gradle", "apply plugin: 'java'");
    fx.mkdir("moduleB/src/main/java");

    fx.scan(&fx.options());
    let calls_after_first = fx.collaborator.calls();
    let second = fx.scan(&fx.options());

    assert_eq!(names(&second.unchanged), vec!["moduleA", "moduleB"]);
    assert!(second.processed.is_empty());
    assert!(second.settings_path.is_none());
    assert_eq!(calls_after_first, 1);
    assert_eq!(fx.collaborator.calls(), calls_after_first);
}

#[test]
fn fingerprint_change_replaces_previous_output() {
    let fx = Fixture::new();
    fx.write("blogs/build.gradle", "version 1");
    fx.mkdir("blogs/src/main/java");
    fx.scan(&fx.options());

    let stray = fx.output("blogs").join("stale.txt");
    fs::write(&stray, "left over").unwrap();
    fx.write("blogs/build.gradle", "version 2");

    let report = fx.scan(&fx.options());

    assert_eq!(report.count(Classification::Changed), 1);
    assert!(!stray.exists());
    assert!(fx.output("blogs").join(RECORD_FILE).is_file());
    let descriptor = fs::read_to_string(fx.output("blogs").join("build.gradle")).unwrap();
    assert!(descriptor.contains("/cache/blogs.jar"));
    assert_eq!(fx.collaborator.calls(), 2);
}

#[test]
fn layout_change_is_changed() {
    let fx = Fixture::new();
    fx.mkdir("blogs/src/main/java");
    fx.scan(&fx.options());

    fx.mkdir("blogs/src/test/java");
    let report = fx.scan(&fx.options());
    assert_eq!(report.count(Classification::Changed), 1);
}

#[test]
fn excluded_directories_hide_their_modules() {
    let fx = Fixture::new();
    fx.mkdir("excludeMe/moduleB/src");
    fx.mkdir("kept/moduleC/src");

    let options = fx.options().with_excluded(ExclusionSet::new(["excludeMe"]));
    let report = fx.scan(&options);

    assert_eq!(names(&report.processed), vec!["moduleC"]);
    assert!(report.modules.lookup("moduleB").is_none());
}

#[test]
fn collaborator_failure_is_isolated_to_its_module() {
    let fx = Fixture::new();
    fx.write("broken/build.gradle", "");
    fx.mkdir("broken/src");
    fx.write("fine/build.gradle", "");
    fx.mkdir("fine/src");
    fx.collaborator.fail_for("broken");

    let report = fx.scan(&fx.options());

    assert_eq!(names(&report.processed), vec!["fine"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "broken");
    assert_eq!(report.failures[0].stage, FailureStage::Dependencies);
    assert!(report.failures[0].error.contains("broken"));
    assert!(!fx.output("broken").join(RECORD_FILE).exists());
    assert!(!report.is_success());

    // No record was written, so the module is retried.
    let again = fx.scan(&fx.options());
    assert_eq!(again.failures.len(), 1);
    assert_eq!(names(&again.unchanged), vec!["fine"]);
}

#[test]
fn unreadable_fingerprint_fails_only_that_module() {
    let fx = Fixture::new();
    fx.mkdir("odd/build.gradle");
    fx.mkdir("odd/src");
    fx.mkdir("fine/src");

    let report = fx.scan(&fx.options());

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stage, FailureStage::Fingerprint);
    assert_eq!(names(&report.processed), vec!["fine"]);
}

#[test]
fn full_rebuild_clears_and_regenerates_everything() {
    let fx = Fixture::new();
    fx.mkdir("a/src");
    fx.mkdir("b/src");
    fx.scan(&fx.options());

    let report = fx.scan(&fx.options().with_full(true));

    assert_eq!(report.cleared, 2);
    assert_eq!(report.count(Classification::New), 2);
    assert!(report.unchanged.is_empty());
}

#[test]
fn dry_run_writes_nothing() {
    let fx = Fixture::new();
    fx.mkdir("a/src");

    let report = fx.scan(&fx.options().with_dry_run(true));

    assert!(report.dry_run);
    assert_eq!(names(&report.processed), vec!["a"]);
    assert!(!fx.project.join("modules").exists());
    assert!(report.settings_path.is_none());
}

#[test]
fn cancelled_scan_processes_nothing() {
    let fx = Fixture::new();
    fx.mkdir("a/src");

    let cancel = Arc::new(AtomicBool::new(true));
    let report = fx
        .use_case()
        .with_cancel_flag(cancel)
        .execute(&fx.options(), Arc::new(RecordingSink::default()))
        .unwrap();

    assert!(report.interrupted);
    assert!(report.processed.is_empty());
    assert!(!fx.project.join("modules").exists());
}

#[test]
fn legacy_web_inf_module_uses_logical_root() {
    let fx = Fixture::new();
    fx.mkdir("portlets/chat/docroot/WEB-INF/src/com/example");

    let report = fx.scan(&fx.options());

    assert_eq!(names(&report.processed), vec!["chat"]);
    assert_eq!(report.processed[0].module_path, fx.portal.join("portlets/chat"));
    let bucket = report.modules.modules_in(&fx.portal.join("portlets")).unwrap();
    assert!(bucket.contains_key("chat"));
    assert_eq!(
        bucket["chat"].layout().source.as_deref(),
        Some(fx.portal.join("portlets/chat/docroot/WEB-INF/src").as_path())
    );
}

#[test]
fn always_policy_reprocesses_modules_without_fingerprint() {
    let fx = Fixture::new();
    fx.mkdir("a/src");
    let options = fx
        .options()
        .with_missing_fingerprint(MissingFingerprintPolicy::Always);

    fx.scan(&options);
    let report = fx.scan(&options);
    assert_eq!(report.count(Classification::Changed), 1);
}

#[test]
fn unreadable_root_aborts() {
    let fx = Fixture::new();
    let options = ScanOptions::new(fx.portal.join("missing"), &fx.project);
    let result = fx
        .use_case()
        .execute(&options, Arc::new(RecordingSink::default()));
    assert!(matches!(result, Err(PortalError::RootUnreadable { .. })));
}

#[test]
fn events_follow_the_scan() {
    let fx = Fixture::new();
    fx.mkdir("a/src");
    let sink = Arc::new(RecordingSink::default());

    fx.use_case().execute(&fx.options(), sink.clone()).unwrap();

    let events = sink.events.lock().unwrap();
    assert!(matches!(events.first(), Some(ScanEvent::Started { known_modules: 0, .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        ScanEvent::Classified { classification: Classification::New, .. }
    )));
    assert!(events.iter().any(|e| matches!(e, ScanEvent::Processed { .. })));
    assert!(matches!(
        events.last(),
        Some(ScanEvent::Completed { new: 1, failed: 0, interrupted: false, .. })
    ));
}

#[test]
fn stored_records_match_discovered_modules() {
    let fx = Fixture::new();
    fx.mkdir("a/src/main/java");
    fx.write("a/build.gradle", "x");
    let report = fx.scan(&fx.options());

    let stored = PropertiesModuleStore::new().load(&fx.project);
    let discovered = report.modules.lookup("a").unwrap();
    assert_eq!(stored.get(discovered.module_path()), Some(discovered));
}

#[test]
fn shared_basenames_get_separate_outputs_and_stay_unchanged() {
    let fx = Fixture::new();
    fx.mkdir("apps/util/src/main/java");
    fx.mkdir("core/util/src/main/java");

    let first = fx.scan(&fx.options());
    let second = fx.scan(&fx.options());
    let third = fx.scan(&fx.options());

    assert_eq!(first.processed.len(), 2);
    assert!(second.processed.is_empty());
    assert_eq!(second.unchanged.len(), 2);
    assert!(third.processed.is_empty());
    assert!(fx.output("apps-util").join(RECORD_FILE).is_file());
    assert!(fx.output("core-util").join(RECORD_FILE).is_file());
    assert!(!fx.output("util").exists());

    let settings = fs::read_to_string(fx.project.join(SETTINGS_FILE)).unwrap();
    assert!(settings.contains("include \"apps-util\""));
    assert!(settings.contains("include \"core-util\""));
}

#[test]
fn module_gaining_a_namesake_moves_its_output() {
    let fx = Fixture::new();
    fx.mkdir("apps/util/src");
    fx.scan(&fx.options());
    assert!(fx.output("util").is_dir());

    fx.mkdir("core/util/src");
    let report = fx.scan(&fx.options());

    assert_eq!(report.count(Classification::Changed), 1);
    assert_eq!(report.count(Classification::New), 1);
    assert!(report.removed.is_empty());
    assert!(!fx.output("util").exists());
    assert!(fx.output("apps-util").join(RECORD_FILE).is_file());
    assert!(fx.output("core-util").join(RECORD_FILE).is_file());
}

#[test]
fn deleted_module_loses_its_output_and_settings_entry() {
    let fx = Fixture::new();
    fx.mkdir("a/src");
    fx.mkdir("b/src");
    fx.scan(&fx.options());

    fs::remove_dir_all(fx.portal.join("b")).unwrap();
    let sink = Arc::new(RecordingSink::default());
    let report = fx.use_case().execute(&fx.options(), sink.clone()).unwrap();

    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].name, "b");
    assert_eq!(names(&report.unchanged), vec!["a"]);
    assert!(!fx.output("b").exists());
    assert_eq!(report.settings_path, Some(fx.project.join(SETTINGS_FILE)));
    let settings = fs::read_to_string(fx.project.join(SETTINGS_FILE)).unwrap();
    assert!(settings.contains("include \"a\""));
    assert!(!settings.contains("include \"b\""));

    let events = sink.events.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, ScanEvent::Removed { name, .. } if name == "b")));
    assert!(matches!(events.last(), Some(ScanEvent::Completed { removed: 1, .. })));
    drop(events);

    let again = fx.scan(&fx.options());
    assert!(again.removed.is_empty());
    assert!(again.settings_path.is_none());
}

#[test]
fn dry_run_reports_removals_without_deleting() {
    let fx = Fixture::new();
    fx.mkdir("a/src");
    fx.mkdir("b/src");
    fx.scan(&fx.options());
    fs::remove_dir_all(fx.portal.join("b")).unwrap();

    let report = fx.scan(&fx.options().with_dry_run(true));

    assert_eq!(report.removed.len(), 1);
    assert!(fx.output("b").join(RECORD_FILE).is_file());
}

#[test]
fn module_failing_its_fingerprint_keeps_its_output() {
    let fx = Fixture::new();
    fx.write("odd/build.gradle", "x");
    fx.mkdir("odd/src");
    fx.scan(&fx.options());

    fs::remove_file(fx.portal.join("odd/build.gradle")).unwrap();
    fx.mkdir("odd/build.gradle");
    let report = fx.scan(&fx.options());

    assert_eq!(report.failures[0].stage, FailureStage::Fingerprint);
    assert!(report.removed.is_empty());
    assert!(fx.output("odd").join(RECORD_FILE).is_file());
}

#[test]
fn descriptors_only_reference_discovered_modules() {
    let fx = Fixture::new();
    fx.write(
        "apps/a/build.gradle",
        "dependencies {\n    compile project(':apps:nonexistent')\n    compile project(':core:b')\n}\n",
    );
    fx.mkdir("apps/a/src");
    fx.mkdir("core/b/src");

    fx.scan(&fx.options());

    let descriptor = fs::read_to_string(fx.output("a").join("build.gradle")).unwrap();
    assert!(descriptor.contains("implementation project(':b')"));
    assert!(!descriptor.contains("nonexistent"));
}

#[test]
fn portal_libraries_reach_every_descriptor() {
    let fx = Fixture::new();
    fx.write("lib/global/portal-kernel.jar", "");
    fx.write("lib/development/junit.jar", "");
    fx.mkdir("a/src");
    fx.mkdir("b/src");

    fx.scan(&fx.options());

    for name in ["a", "b"] {
        let descriptor = fs::read_to_string(fx.output(name).join("build.gradle")).unwrap();
        let kernel = fx.portal.join("lib/global/portal-kernel.jar");
        assert!(descriptor.contains(&format!("compileOnly files('{}')", kernel.display())));
        assert!(descriptor.contains("junit.jar"));
    }
}
