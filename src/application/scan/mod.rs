//! Scan Use Case
//!
//! Discovers modules in one source tree and regenerates the outputs of those
//! that are new or changed since the last run:
//! - Phase 1 loads the recorded state, walks the tree and classifies every module root
//! - Phase 2 drops outputs of vanished or moved modules, then resolves
//!   dependencies and rewrites outputs for New/Changed modules

mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use options::ScanOptions;
pub use result::{FailureStage, ModuleFailure, ModuleOutcome, RemovedModule, ScanReport};
pub use use_case::ScanUseCase;
