//! Scenario: clean, then scan again from nothing.

use portalmod::application::{CleanOptions, CleanUseCase};
use portalmod::infrastructure::{LocalFs, PropertiesModuleStore};
use portalmod::Classification;

use crate::common::*;
use crate::incremental_rebuild::scan;

#[test]
fn scenario_clean_then_rescan_starts_over() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);

    let cleaned = CleanUseCase::new(PropertiesModuleStore::new(), LocalFs::new())
        .execute(&CleanOptions::new(env.project()))
        .unwrap();
    assert_eq!(cleaned.removed, STANDARD_MODULES.len());
    assert!(!env.project().join("settings.gradle").exists());
    assert!(!env.module_output("blogs-api").exists());

    let report = scan(&env, false);
    assert!(report
        .processed
        .iter()
        .all(|o| o.classification == Classification::New));
    assert_eq!(report.processed.len(), STANDARD_MODULES.len());
}
