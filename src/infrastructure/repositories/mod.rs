//! Repository Implementations
//!
//! Concrete implementations of the record and declared-dependency ports.

mod dependency_properties;
mod module_store;
pub mod properties;

pub use dependency_properties::{PropertiesDependencySource, DEFAULT_DEPENDENCY_FILE};
pub use module_store::{
    from_properties, record_key, to_properties, PropertiesModuleStore, KEY_CHECKSUM,
    KEY_MODULE_PATH, RECORD_FILE,
};
