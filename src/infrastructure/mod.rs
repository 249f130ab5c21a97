//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and the run lock
//! - `repositories/` - Module records and declared dependencies (properties files)
//! - `build/` - Build collaborators (Gradle, none)
//! - `descriptor/` - Generated Gradle descriptors
//! - `events/` - Scan event sinks (console, NDJSON)

pub mod build;
pub mod descriptor;
pub mod events;
pub mod fs;
pub mod repositories;

pub use build::{GradleCollaborator, NoopCollaborator};
pub use descriptor::GradleDescriptorWriter;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, RunLock};
pub use repositories::{PropertiesDependencySource, PropertiesModuleStore};
