//! Exclusion set value object
//!
//! Directory basenames that prune a whole subtree wherever they appear.

use std::collections::BTreeSet;
use std::path::Path;

/// Set of excluded directory basenames (exact match).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Empty set (excludes nothing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from any list of names; blank entries are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Parse a comma-separated list such as `".git, build,tmp"`.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    /// Check a bare name
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check a directory by its basename
    pub fn is_excluded(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.contains(n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}
