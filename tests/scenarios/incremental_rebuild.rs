//! Scenario: repeated scans of an evolving source tree.

use std::fs;
use std::sync::Arc;

use portalmod::application::{ScanOptions, ScanReport, ScanUseCase};
use portalmod::domain::ports::NoopEventSink;
use portalmod::domain::value_objects::ExclusionSet;
use portalmod::infrastructure::{
    GradleDescriptorWriter, LocalFs, NoopCollaborator, PropertiesModuleStore,
};
use portalmod::Classification;

use crate::common::*;

pub fn scan(env: &TestEnv, full: bool) -> ScanReport {
    let options = ScanOptions::new(env.portal(), env.project())
        .with_excluded(ExclusionSet::new([".git", "node_modules"]))
        .with_full(full);
    ScanUseCase::new(
        LocalFs::new(),
        PropertiesModuleStore::new(),
        NoopCollaborator,
        GradleDescriptorWriter::new(),
    )
    .execute(&options, Arc::new(NoopEventSink))
    .expect("scan succeeds")
}

fn names(report: &ScanReport, classification: Classification) -> Vec<String> {
    report
        .processed
        .iter()
        .chain(&report.unchanged)
        .filter(|o| o.classification == classification)
        .map(|o| o.name.clone())
        .collect()
}

#[test]
fn scenario_first_scan_then_nothing_to_do() {
    let env = TestEnv::new();
    standard_portal(&env);

    let first = scan(&env, false);
    assert_eq!(names(&first, Classification::New), STANDARD_MODULES);
    assert!(first.is_success());
    assert!(first.modules.lookup("left-pad").is_none());

    let second = scan(&env, false);
    assert!(second.processed.is_empty());
    assert_eq!(names(&second, Classification::Unchanged), STANDARD_MODULES);
    assert!(second.settings_path.is_none());
}

#[test]
fn scenario_editing_one_fingerprint_only_rebuilds_that_module() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);

    env.write(
        "modules/apps/blogs/blogs-api/build.gradle",
        "apply plugin: 'java'\nversion = '2.0'\n",
    );
    let report = scan(&env, false);

    assert_eq!(names(&report, Classification::Changed), vec!["blogs-api"]);
    assert_eq!(report.unchanged.len(), STANDARD_MODULES.len() - 1);
}

#[test]
fn scenario_generated_descriptors_link_modules() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);

    let web = fs::read_to_string(env.module_output("blogs-web").join("build.gradle")).unwrap();
    assert!(web.contains("implementation project(':blogs-api')"));
    assert!(!web.contains("commented-out"));
    assert!(web.contains("src/test/java"));

    let kernel =
        fs::read_to_string(env.module_output("portal-kernel").join("build.gradle")).unwrap();
    assert!(kernel.contains("lib/commons.jar"));

    let settings = fs::read_to_string(env.project().join("settings.gradle")).unwrap();
    for name in STANDARD_MODULES {
        assert!(settings.contains(&format!("include \"{name}\"")), "{name} missing");
    }
    assert!(!settings.contains("left-pad"));
}

#[test]
fn scenario_new_module_appears_between_runs() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);

    env.mkdir("modules/apps/wiki/src/main/java");
    let report = scan(&env, false);

    assert_eq!(names(&report, Classification::New), vec!["wiki"]);
    let settings = fs::read_to_string(env.project().join("settings.gradle")).unwrap();
    assert!(settings.contains("include \"wiki\""));
    assert!(settings.contains("include \"blogs-api\""));
}

#[test]
fn scenario_full_rebuild_regenerates_everything() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);

    let report = scan(&env, true);
    assert_eq!(report.cleared, STANDARD_MODULES.len());
    assert_eq!(names(&report, Classification::New), STANDARD_MODULES);
}

#[test]
fn scenario_deleted_module_is_dropped_from_the_project() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);
    assert!(env.module_output("chat").is_dir());

    fs::remove_dir_all(env.portal().join("portlets/chat")).unwrap();
    let report = scan(&env, false);

    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].name, "chat");
    assert!(!env.module_output("chat").exists());
    let settings = fs::read_to_string(env.project().join("settings.gradle")).unwrap();
    assert!(!settings.contains("include \"chat\""));
    assert!(settings.contains("include \"portal-kernel\""));
}
