//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_collaborator;
pub mod dependency_source;
pub mod descriptor_generator;
pub mod file_system;
pub mod module_store;
pub mod scan_events;

pub use build_collaborator::{BuildCollaborator, CollaboratorError, ResolvedArchives};
pub use dependency_source::{ModuleDependencySource, NoDeclaredDependencies};
pub use descriptor_generator::{DescriptorContext, DescriptorError, DescriptorGenerator};
pub use file_system::{DirEntry, EntryKind, FileSystem, FsError, FsResult};
pub use module_store::{ModuleStore, StoreError, StoreResult, MODULES_DIR};
pub use scan_events::{NoopEventSink, ScanEvent, ScanEventSink};
