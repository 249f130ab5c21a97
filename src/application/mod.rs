//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScanUseCase` - Walk, classify and regenerate one source tree (also backs `plan`)
//! - `CleanUseCase` - Remove every generated module output
//! - `ShowUseCase` - Resolve one module without persisting anything

pub mod clean;
pub mod scan;
pub mod show;

pub use clean::{CleanOptions, CleanResult, CleanUseCase};
pub use scan::{
    FailureStage, ModuleFailure, ModuleOutcome, RemovedModule, ScanOptions, ScanReport,
    ScanUseCase,
};
pub use show::{portal_root_for, ShowOptions, ShowUseCase};
