//! Project names for the modules of one source tree
//!
//! A project name keys both the output directory and the settings `include`.
//! It is the module's basename unless another module in the same tree shares
//! it; then the path relative to the source root is joined with `-`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use crate::domain::entities::module_name;

/// Assign a unique project name to every module path.
pub fn project_names(portal_root: &Path, module_paths: &[PathBuf]) -> BTreeMap<PathBuf, String> {
    let paths: BTreeSet<&PathBuf> = module_paths.iter().collect();

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for path in &paths {
        *counts.entry(module_name(path)).or_default() += 1;
    }

    let mut taken: BTreeSet<String> = counts
        .iter()
        .filter(|(_, count)| **count == 1)
        .map(|(name, _)| name.clone())
        .collect();

    let mut names = BTreeMap::new();
    for path in paths {
        let name = module_name(path);
        if counts.get(&name) == Some(&1) {
            names.insert(path.clone(), name);
            continue;
        }
        let base = qualified_name(portal_root, path);
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !taken.insert(candidate.clone()) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        names.insert(path.clone(), candidate);
    }
    names
}

fn qualified_name(portal_root: &Path, module_path: &Path) -> String {
    let relative = module_path.strip_prefix(portal_root).unwrap_or(module_path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        module_name(module_path)
    } else {
        parts.join("-")
    }
}
