//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod checksum;
mod exclusion;
mod fingerprint_policy;
mod path_kind;

pub use checksum::Checksum;
pub use exclusion::ExclusionSet;
pub use fingerprint_policy::MissingFingerprintPolicy;
pub use path_kind::{PathKind, ResourceSet};
