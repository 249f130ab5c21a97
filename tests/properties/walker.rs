//! Property tests for discovery over random directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use portalmod::domain::services::{DiscoveryWalker, MODULE_MARKER};
use portalmod::domain::value_objects::ExclusionSet;
use portalmod::infrastructure::LocalFs;
use tempfile::TempDir;

const EXCLUDED: &str = "skip";

fn relative_dir() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(
        prop_oneof![Just("a"), Just("b"), Just("src"), Just(EXCLUDED), Just("c")],
        1..=5,
    )
}

fn build_tree(dirs: &[Vec<&'static str>]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for parts in dirs {
        let path = parts.iter().fold(root.path().to_path_buf(), |p, c| p.join(c));
        fs::create_dir_all(path).unwrap();
    }
    root
}

fn roots(tree: &Path) -> Vec<PathBuf> {
    let fs = LocalFs::new();
    let excluded = ExclusionSet::new([EXCLUDED]);
    DiscoveryWalker::new(&fs, &excluded)
        .walk(tree)
        .unwrap()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no yielded root is an ancestor of another.
    #[test]
    fn property_roots_are_never_nested(dirs in proptest::collection::vec(relative_dir(), 0..12)) {
        let tree = build_tree(&dirs);
        let found = roots(tree.path());

        for (i, a) in found.iter().enumerate() {
            for (j, b) in found.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a), "{} contains {}", a.display(), b.display());
                }
            }
        }
    }

    /// PROPERTY: every root has the marker and no excluded component.
    #[test]
    fn property_roots_are_marked_and_not_excluded(dirs in proptest::collection::vec(relative_dir(), 0..12)) {
        let tree = build_tree(&dirs);

        for root in roots(tree.path()) {
            prop_assert!(root.join(MODULE_MARKER).is_dir());
            let relative = root.strip_prefix(tree.path()).unwrap();
            prop_assert!(relative.components().all(|c| c.as_os_str() != EXCLUDED));
        }
    }

    /// PROPERTY: a marker reachable without crossing an excluded dir or another root is found.
    #[test]
    fn property_top_level_markers_are_found(dirs in proptest::collection::vec(relative_dir(), 0..12)) {
        let tree = build_tree(&dirs);
        let found = roots(tree.path());

        for parts in &dirs {
            let Some(marker) = parts.iter().position(|p| *p == MODULE_MARKER) else {
                continue;
            };
            if parts[..marker].contains(&EXCLUDED) {
                continue;
            }
            let module = parts[..marker]
                .iter()
                .fold(tree.path().to_path_buf(), |p, c| p.join(c));
            prop_assert!(
                found.iter().any(|root| module.starts_with(root)),
                "{} not covered",
                module.display()
            );
        }
    }

    /// PROPERTY: walking is deterministic.
    #[test]
    fn property_walk_is_repeatable(dirs in proptest::collection::vec(relative_dir(), 0..12)) {
        let tree = build_tree(&dirs);
        prop_assert_eq!(roots(tree.path()), roots(tree.path()));
    }
}
