//! Console Event Sink
//!
//! Human-readable progress lines. Unchanged modules are only counted.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ScanEvent, ScanEventSink};
use crate::domain::services::Classification;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_fmt(text);
            let _ = writeln!(writer);
        }
    }
}

impl ScanEventSink for ConsoleEventSink {
    fn on_event(&self, event: ScanEvent) {
        match event {
            ScanEvent::Started {
                portal_root,
                project_root,
                known_modules,
                dry_run,
            } => self.line(format_args!(
                "{} {} -> {} ({} recorded)",
                if dry_run { "Planning" } else { "Scanning" },
                portal_root.display(),
                project_root.display(),
                known_modules
            )),
            ScanEvent::Classified {
                name,
                classification,
                ..
            } if classification != Classification::Unchanged => {
                self.line(format_args!("  {:<9} {}", classification.as_str(), name))
            }
            ScanEvent::Classified { .. } => {}
            ScanEvent::Processed {
                name,
                jar_count,
                module_dependency_count,
                ..
            } => self.line(format_args!(
                "  generated {} ({} jars, {} module deps)",
                name, jar_count, module_dependency_count
            )),
            ScanEvent::Removed { name, .. } => self.line(format_args!("  removed   {}", name)),
            ScanEvent::Failed { name, error, .. } => {
                self.line(format_args!("  failed    {}: {}", name, error))
            }
            ScanEvent::Completed {
                unchanged,
                new,
                changed,
                removed,
                failed,
                interrupted,
            } => {
                let removed = if removed > 0 {
                    format!(", {removed} removed")
                } else {
                    String::new()
                };
                self.line(format_args!(
                    "{} new, {} changed, {} unchanged{}, {} failed{}",
                    new,
                    changed,
                    unchanged,
                    removed,
                    failed,
                    if interrupted { " (interrupted)" } else { "" }
                ));
            }
        }
    }
}
