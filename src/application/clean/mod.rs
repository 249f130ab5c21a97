//! Clean Use Case
//!
//! Removes every generated module output under a project root.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanResult;
pub use use_case::CleanUseCase;
