//! File System Implementations
//!
//! Concrete implementation of the FileSystem port, plus the run lock.

mod local;
mod lock;

pub use local::LocalFs;
pub use lock::{RunLock, LOCK_FILE};
