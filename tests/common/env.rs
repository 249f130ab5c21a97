//! Test environment builder for isolated portalmod testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a portalmod CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parsed NDJSON lines of stdout
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated source tree (`<tmp>/src/portal`) and output root (`<tmp>/out`).
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(root.path().join("src/portal")).expect("create portal dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Source tree root
    pub fn portal(&self) -> PathBuf {
        self.root().join("src/portal")
    }

    /// Output root given as `project.dir`
    pub fn output_root(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Per-tree output root: `<project.dir>/<basename(portal)>`
    pub fn project(&self) -> PathBuf {
        self.output_root().join("portal")
    }

    pub fn portal_path(&self, relative: &str) -> PathBuf {
        self.portal().join(relative)
    }

    pub fn module_output(&self, name: &str) -> PathBuf {
        self.project().join("modules").join(name)
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.portal_path(relative);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.portal_path(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(&path, content).expect("write file");
        path
    }

    /// Write `portalmod.toml` in the working directory with the build tool off.
    pub fn write_config(&self, extra: &str) {
        let config = format!(
            "[project]\ndir = {:?}\nportal_dirs = [{:?}]\n\n[build]\nenabled = false\n{}",
            self.output_root().display().to_string(),
            self.portal().display().to_string(),
            extra
        );
        fs::write(self.root().join("portalmod.toml"), config).expect("write config");
    }

    /// Run the binary with the temp dir as working directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_portalmod"))
            .args(args)
            .current_dir(self.root())
            .env("HOME", self.root().join("home"))
            .env("XDG_CONFIG_HOME", self.root().join("xdg"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PORTALMOD_PROJECT_DIR")
            .env_remove("PORTALMOD_PORTAL_DIRS")
            .env_remove("PORTALMOD_IGNORED_DIRS")
            .env_remove("PORTALMOD_MISSING_FINGERPRINT")
            .env_remove("PORTALMOD_DISPLAY_BUILD_OUTPUT")
            .output()
            .expect("run portalmod");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
