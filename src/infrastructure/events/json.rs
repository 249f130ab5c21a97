//! JSON Event Sink
//!
//! Outputs scan events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ScanEvent, ScanEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ScanEventSink for JsonEventSink {
    fn on_event(&self, event: ScanEvent) {
        let json = match event {
            ScanEvent::Started {
                portal_root,
                project_root,
                known_modules,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": self.command,
                "portal_dir": portal_root.display().to_string(),
                "project_dir": project_root.display().to_string(),
                "known_modules": known_modules,
                "dry_run": dry_run,
            }),

            ScanEvent::Classified {
                module_path,
                name,
                classification,
            } => serde_json::json!({
                "event": "classified",
                "command": self.command,
                "module": name,
                "path": module_path.display().to_string(),
                "classification": classification.as_str(),
            }),

            ScanEvent::Processed {
                name,
                output_path,
                jar_count,
                module_dependency_count,
            } => serde_json::json!({
                "event": "processed",
                "command": self.command,
                "module": name,
                "output": output_path.display().to_string(),
                "jars": jar_count,
                "module_dependencies": module_dependency_count,
            }),

            ScanEvent::Removed {
                module_path,
                name,
                output_path,
            } => serde_json::json!({
                "event": "removed",
                "command": self.command,
                "module": name,
                "path": module_path.display().to_string(),
                "output": output_path.display().to_string(),
            }),

            ScanEvent::Failed {
                module_path,
                name,
                error,
            } => serde_json::json!({
                "event": "module_error",
                "command": self.command,
                "module": name,
                "path": module_path.display().to_string(),
                "error": error,
            }),

            ScanEvent::Completed {
                unchanged,
                new,
                changed,
                removed,
                failed,
                interrupted,
            } => {
                let status = match (interrupted, failed) {
                    (true, _) => "interrupted",
                    (false, 0) => "success",
                    (false, _) => "partial",
                };
                serde_json::json!({
                    "event": "complete",
                    "command": self.command,
                    "status": status,
                    "unchanged": unchanged,
                    "new": new,
                    "changed": changed,
                    "removed": removed,
                    "errors": failed,
                })
            }
        };

        self.write_event(json);
    }
}
