//! Property tests for layout resolution.

use std::fs;

use proptest::prelude::*;

use portalmod::domain::services::{normalize_module_root, PathResolver};
use portalmod::infrastructure::LocalFs;

const LAYOUT_DIRS: &[&str] = &[
    "src",
    "src/main/java",
    "src/main/resources",
    "src/test/java",
    "src/test/resources",
    "src/testIntegration/java",
    "test/unit",
    "test/integration",
    "docroot/WEB-INF/src",
    "docroot/WEB-INF/src/test/java",
];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolving twice gives the same layout, and every path exists.
    #[test]
    fn property_layout_is_idempotent(present in proptest::sample::subsequence(LAYOUT_DIRS.to_vec(), 0..=LAYOUT_DIRS.len())) {
        let dir = tempfile::tempdir().unwrap();
        let module = dir.path().join("module");
        fs::create_dir_all(&module).unwrap();
        for rel in &present {
            fs::create_dir_all(module.join(rel)).unwrap();
        }

        let local = LocalFs::new();
        let resolver = PathResolver::new(&local);
        let first = resolver.resolve_layout(&module);
        let second = resolver.resolve_layout(&module);

        prop_assert_eq!(&first, &second);
        for (_, path) in first.resolved() {
            prop_assert!(path.is_dir());
            prop_assert!(path.starts_with(&module));
        }
    }

    /// PROPERTY: normalizing a module root is idempotent.
    #[test]
    fn property_normalize_is_idempotent(parts in proptest::collection::vec(
        prop_oneof![Just("a"), Just("docroot"), Just("WEB-INF"), Just("b")],
        0..6,
    )) {
        let path = parts.iter().fold(std::path::PathBuf::from("/portal"), |p, c| p.join(c));
        let once = normalize_module_root(&path);
        prop_assert_eq!(normalize_module_root(&once), once.clone());
    }
}
