//! Configuration module for portalmod
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PORTALMOD_*)
//! 3. `--config` file, else `./portalmod.toml`, else `./build.properties`
//! 4. User config (`<config dir>/portalmod/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_build_properties, with_overrides_from, ConfigWarning, CONFIG_FILE, ENV_DISPLAY_BUILD_OUTPUT,
    ENV_IGNORED_DIRS, ENV_MISSING_FINGERPRINT, ENV_PORTAL_DIRS, ENV_PROJECT_DIR,
    LEGACY_CONFIG_FILE,
};
pub use types::{
    BuildConfig, Config, DependenciesConfig, DescriptorConfig, ProjectConfig, ScanConfig,
};
