//! Domain Services
//!
//! Business logic operating on domain entities. File access goes through
//! the `FileSystem` port; `Planner` is pure.

mod dependency_resolver;
mod identity;
mod naming;
mod path_resolver;
mod planner;
mod walker;

pub use dependency_resolver::{
    declared_project_references, portal_lib_jars, DependencyResolver, DEFAULT_DESCRIPTOR_FILE,
    DEFAULT_PORTAL_LIB_DIRS, LIB_DIR,
};
pub use identity::{ModuleIdentity, DEFAULT_FINGERPRINT_FILE};
pub use naming::project_names;
pub use path_resolver::{normalize_module_root, PathResolver};
pub use planner::{Classification, PlannedModule, Planner, ScanPlan, StaleOutput};
pub use walker::{Decision, DiscoveryWalker, Walk, MODULE_MARKER};
