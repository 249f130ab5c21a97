//! Gradle Build Collaborator
//!
//! Runs a Gradle task that prints one `<module>=<archive>` line per resolved
//! archive and turns its stdout into the archive mapping.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{BuildCollaborator, CollaboratorError, ResolvedArchives};

/// Task printing resolved archives
pub const DEPENDENCY_TASK: &str = "printJarDependencies";

/// Wrapper script looked up in the portal root
pub const WRAPPER: &str = if cfg!(windows) { "gradlew.bat" } else { "gradlew" };

/// Lines of stderr kept in a failure
const STDERR_TAIL_LINES: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct GradleCollaborator {
    command: Option<String>,
}

impl GradleCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `command` instead of the wrapper lookup
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command.filter(|c| !c.trim().is_empty());
        self
    }

    /// Configured command, else the portal's wrapper, else `gradle` on PATH.
    pub fn program(&self, portal_root: &Path) -> PathBuf {
        if let Some(command) = &self.command {
            return PathBuf::from(command);
        }
        let wrapper = portal_root.join(WRAPPER);
        if wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from("gradle")
        }
    }
}

/// Parse `<module>=<archive>` lines; anything else is ignored.
pub fn parse_output(stdout: &str) -> ResolvedArchives {
    let mut archives = ResolvedArchives::new();
    for line in stdout.lines() {
        let Some((name, path)) = line.split_once('=') else {
            continue;
        };
        let (name, path) = (name.trim(), path.trim());
        if name.is_empty() || path.is_empty() {
            continue;
        }
        let entry: &mut Vec<PathBuf> = archives.entry(name.to_string()).or_default();
        let path = PathBuf::from(path);
        if !entry.contains(&path) {
            entry.push(path);
        }
    }
    archives
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}

impl BuildCollaborator for GradleCollaborator {
    fn name(&self) -> &'static str {
        "gradle"
    }

    fn resolve(
        &self,
        module_path: &Path,
        project_root: &Path,
        display_output: bool,
    ) -> Result<ResolvedArchives, CollaboratorError> {
        let program = self.program(project_root);
        let command = program.display().to_string();

        let mut cmd = Command::new(&program);
        cmd.arg("--quiet")
            .arg("-p")
            .arg(module_path)
            .arg(DEPENDENCY_TASK)
            .arg(format!("-PportalDir={}", project_root.display()))
            .current_dir(project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped());

        if display_output {
            cmd.stderr(Stdio::inherit());
        } else {
            cmd.stderr(Stdio::piped());
        }

        debug!(%command, module = %module_path.display(), "resolving archives");
        let output = cmd.output().map_err(|source| CollaboratorError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(CollaboratorError::Failed {
                command,
                code: output.status.code(),
                stderr: tail(&String::from_utf8_lossy(&output.stderr), STDERR_TAIL_LINES),
            });
        }

        Ok(parse_output(&String::from_utf8_lossy(&output.stdout)))
    }
}
