//! Scan planning service
//!
//! Pure domain logic: compares a freshly resolved module against its stored
//! record and decides whether its outputs need regenerating. No I/O.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::Module;
use crate::domain::value_objects::MissingFingerprintPolicy;

/// How a discovered module compares to its stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Record matches; nothing to do
    Unchanged,
    /// No record for this output location
    New,
    /// Record differs in layout, checksum or output location
    Changed,
}

impl Classification {
    pub fn needs_processing(self) -> bool {
        !matches!(self, Classification::Unchanged)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Unchanged => "unchanged",
            Classification::New => "new",
            Classification::Changed => "changed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure classification service
pub struct Planner;

impl Planner {
    /// Classify `fresh` against the record stored for the same output location.
    pub fn classify(
        stored: Option<&Module>,
        fresh: &Module,
        policy: MissingFingerprintPolicy,
    ) -> Classification {
        match stored {
            None => Classification::New,
            Some(stored) if stored != fresh => Classification::Changed,
            Some(stored) if stored.output_path() != fresh.output_path() => Classification::Changed,
            Some(_)
                if fresh.checksum().is_none() && policy == MissingFingerprintPolicy::Always =>
            {
                Classification::Changed
            }
            Some(_) => Classification::Unchanged,
        }
    }
}

/// One discovered module with its planning decision
#[derive(Debug, Clone)]
pub struct PlannedModule {
    /// Directory the walker yielded (before normalization)
    pub discovered_root: PathBuf,
    /// Freshly resolved module, output path assigned
    pub module: Module,
    pub classification: Classification,
}

impl PlannedModule {
    pub fn new(discovered_root: PathBuf, module: Module, classification: Classification) -> Self {
        Self {
            discovered_root,
            module,
            classification,
        }
    }

    pub fn needs_processing(&self) -> bool {
        self.classification.needs_processing()
    }
}

/// Output directory whose record no longer matches a module's output location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleOutput {
    pub module_path: PathBuf,
    pub output_path: PathBuf,
    /// The module is gone from the source tree (otherwise it moved)
    pub removed: bool,
}

/// Decisions for every module discovered in one source tree, in discovery order
#[derive(Debug, Clone, Default)]
pub struct ScanPlan {
    pub modules: Vec<PlannedModule>,
    /// Every module path the walk found, including ones that failed planning
    pub discovered: BTreeSet<PathBuf>,
}

impl ScanPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, planned: PlannedModule) {
        self.discovered
            .insert(planned.module.module_path().to_path_buf());
        self.modules.push(planned);
    }

    pub fn mark_discovered(&mut self, module_path: &Path) {
        self.discovered.insert(module_path.to_path_buf());
    }

    /// Stored outputs to delete before processing: records of modules the
    /// walk no longer finds, and previous locations of modules that moved.
    pub fn stale_outputs(&self, snapshot: &BTreeMap<PathBuf, Module>) -> Vec<StaleOutput> {
        let moved: BTreeMap<&Path, Option<&Path>> = self
            .to_process()
            .map(|p| (p.module.module_path(), p.module.output_path()))
            .collect();

        snapshot
            .iter()
            .filter_map(|(module_path, stored)| {
                let output_path = stored.output_path()?;
                let removed = !self.discovered.contains(module_path);
                let relocated = moved
                    .get(module_path.as_path())
                    .is_some_and(|fresh| *fresh != Some(output_path));
                (removed || relocated).then(|| StaleOutput {
                    module_path: module_path.clone(),
                    output_path: output_path.to_path_buf(),
                    removed,
                })
            })
            .collect()
    }

    /// Modules whose outputs must be regenerated
    pub fn to_process(&self) -> impl Iterator<Item = &PlannedModule> {
        self.modules.iter().filter(|m| m.needs_processing())
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.modules
            .iter()
            .filter(|m| m.classification == classification)
            .count()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
