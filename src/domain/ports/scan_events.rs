//! Scan Event Port
//!
//! Observable interface for scan operations: progress display, NDJSON
//! event streams for CI, or silence.

use std::path::PathBuf;

use crate::domain::services::Classification;

/// Event emitted during a scan
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// Scan of one source tree started
    Started {
        portal_root: PathBuf,
        project_root: PathBuf,
        known_modules: usize,
        dry_run: bool,
    },

    /// A discovered module root was classified
    Classified {
        module_path: PathBuf,
        name: String,
        classification: Classification,
    },

    /// A module's output was regenerated
    Processed {
        name: String,
        output_path: PathBuf,
        jar_count: usize,
        module_dependency_count: usize,
    },

    /// Output of a module no longer in the source tree was deleted
    Removed {
        module_path: PathBuf,
        name: String,
        output_path: PathBuf,
    },

    /// A module could not be planned or processed
    Failed {
        module_path: PathBuf,
        name: String,
        error: String,
    },

    /// Scan finished
    Completed {
        unchanged: usize,
        new: usize,
        changed: usize,
        removed: usize,
        failed: usize,
        interrupted: bool,
    },
}

/// Trait for receiving scan events
pub trait ScanEventSink: Send + Sync {
    fn on_event(&self, event: ScanEvent);

    /// Whether per-module events are wanted (summary-only sinks return false)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScanEventSink for NoopEventSink {
    fn on_event(&self, _event: ScanEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
