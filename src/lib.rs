//! portalmod - incremental module discovery for portal source trees
//!
//! Walks a multi-module source tree, recognises module roots by their layout,
//! compares each against the record written by the previous run and
//! regenerates build descriptors only for modules that are new or changed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{CleanUseCase, ScanOptions, ScanReport, ScanUseCase, ShowUseCase};
pub use config::Config;
pub use domain::entities::{Module, ModuleMap};
pub use domain::services::Classification;
pub use error::{PortalError, PortalResult};
