//! Scenario: legacy `docroot/WEB-INF` modules next to conventional ones.

use std::fs;

use crate::common::*;
use crate::incremental_rebuild::scan;

#[test]
fn scenario_legacy_module_is_recorded_at_its_logical_root() {
    let env = TestEnv::new();
    standard_portal(&env);
    let report = scan(&env, false);

    let chat = report.modules.lookup("chat").expect("chat discovered");
    assert_eq!(chat.module_path(), env.portal_path("portlets/chat"));
    assert!(report
        .modules
        .modules_in(&env.portal_path("portlets"))
        .is_some_and(|bucket| bucket.contains_key("chat")));

    let record =
        fs::read_to_string(env.module_output("chat").join("module-info.properties")).unwrap();
    assert!(record.contains("module.path="));
    assert!(record.contains("WEB-INF/src"));
    assert!(!record.contains("checksum="));
}

#[test]
fn scenario_legacy_module_without_fingerprint_stays_unchanged() {
    let env = TestEnv::new();
    standard_portal(&env);
    scan(&env, false);

    let report = scan(&env, false);
    assert!(report.unchanged.iter().any(|o| o.name == "chat"));
}
