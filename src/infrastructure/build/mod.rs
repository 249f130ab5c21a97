//! Build Collaborator Implementations

mod gradle;
mod noop;

pub use gradle::{parse_output, GradleCollaborator, DEPENDENCY_TASK, WRAPPER};
pub use noop::NoopCollaborator;
