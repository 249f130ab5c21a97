//! Configuration loading
//!
//! Sources, lowest priority first: built-in defaults, a config file, then
//! `PORTALMOD_*` environment variables. CLI flags are applied by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::MissingFingerprintPolicy;
use crate::error::{PortalError, PortalResult};
use crate::infrastructure::repositories::properties::{self, Properties};

use super::types::Config;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "portalmod.toml";

/// Legacy properties configuration, looked up when no TOML file exists
pub const LEGACY_CONFIG_FILE: &str = "build.properties";

pub const ENV_PROJECT_DIR: &str = "PORTALMOD_PROJECT_DIR";
pub const ENV_PORTAL_DIRS: &str = "PORTALMOD_PORTAL_DIRS";
pub const ENV_IGNORED_DIRS: &str = "PORTALMOD_IGNORED_DIRS";
pub const ENV_MISSING_FINGERPRINT: &str = "PORTALMOD_MISSING_FINGERPRINT";
pub const ENV_DISPLAY_BUILD_OUTPUT: &str = "PORTALMOD_DISPLAY_BUILD_OUTPUT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a TOML configuration and collect unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> PortalResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PortalError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.origin = Some(path.to_path_buf());

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load a legacy `build.properties` file.
///
/// Lists are comma separated. Keys other than the known ones are ignored.
pub fn load_build_properties(path: &Path) -> PortalResult<Config> {
    let bytes = fs::read(path)?;
    let props = properties::parse(&properties::decode_latin1(&bytes)).map_err(|e| {
        PortalError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    let mut config = from_build_properties(&props);
    config.origin = Some(path.to_path_buf());
    Ok(config)
}

fn from_build_properties(props: &Properties) -> Config {
    let mut config = Config::default();
    if let Some(dir) = props.get("project.dir").filter(|d| !d.trim().is_empty()) {
        config.project.dir = Some(PathBuf::from(dir.trim()));
    }
    if let Some(dirs) = props.get("portal.dirs") {
        config.project.portal_dirs = split_list(dirs).map(PathBuf::from).collect();
    }
    if let Some(ignored) = props.get("ignored.dirs") {
        config.scan.ignored_dirs = split_list(ignored).map(str::to_string).collect();
    }
    if let Some(display) = props.get("display.gradle.process.output") {
        config.build.display_output = parse_bool(display);
    }
    if let Some(types) = props.get("exclude.types") {
        config.descriptor.exclude_types = split_list(types).map(str::to_string).collect();
    }
    config
}

/// Resolve the configuration for one invocation.
///
/// An explicit path must exist. Otherwise `portalmod.toml`, then
/// `build.properties` in the working directory, then the user config
/// directory are tried; with none present the defaults apply.
pub fn discover(explicit: Option<&Path>) -> PortalResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PortalError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            load_any(path)?
        }
        None => match candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => load_any(&path)?,
            None => {
                debug!("no configuration file found; using defaults");
                (Config::default(), Vec::new())
            }
        },
    };
    Ok((with_env_overrides(config), warnings))
}

fn load_any(path: &Path) -> PortalResult<(Config, Vec<ConfigWarning>)> {
    debug!(path = %path.display(), "loading configuration");
    if path.extension().is_some_and(|ext| ext == "properties") {
        Ok((load_build_properties(path)?, Vec::new()))
    } else {
        load_with_warnings(path)
    }
}

fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE), PathBuf::from(LEGACY_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("portalmod").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (PORTALMOD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any variable lookup.
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = lookup(ENV_PROJECT_DIR).filter(|d| !d.trim().is_empty()) {
        config.project.dir = Some(PathBuf::from(dir.trim()));
    }

    if let Some(dirs) = lookup(ENV_PORTAL_DIRS) {
        let parsed: Vec<PathBuf> = split_list(&dirs).map(PathBuf::from).collect();
        if !parsed.is_empty() {
            config.project.portal_dirs = parsed;
        }
    }

    if let Some(ignored) = lookup(ENV_IGNORED_DIRS) {
        config.scan.ignored_dirs = split_list(&ignored).map(str::to_string).collect();
    }

    if let Some(policy) = lookup(ENV_MISSING_FINGERPRINT) {
        match policy.parse::<MissingFingerprintPolicy>() {
            Ok(policy) => config.scan.missing_fingerprint = policy,
            Err(error) => warn!(variable = ENV_MISSING_FINGERPRINT, %error, "ignored"),
        }
    }

    if let Some(display) = lookup(ENV_DISPLAY_BUILD_OUTPUT) {
        config.build.display_output = parse_bool(&display);
    }

    config
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "dir",
        "portal_dirs",
        "scan",
        "ignored_dirs",
        "fingerprint_file",
        "missing_fingerprint",
        "build",
        "enabled",
        "command",
        "descriptor_file",
        "display_output",
        "dependencies",
        "file",
        "descriptor",
        "exclude_types",
        "portal_lib_dirs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
