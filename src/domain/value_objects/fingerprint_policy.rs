//! Policy for modules that have no fingerprint file

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a module without a fingerprint file is classified on later runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingFingerprintPolicy {
    /// An absent checksum compares equal to an absent checksum.
    #[default]
    Stable,
    /// A module without a fingerprint file is regenerated on every run.
    Always,
}

impl FromStr for MissingFingerprintPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "always" => Ok(Self::Always),
            other => Err(format!(
                "unknown missing-fingerprint policy '{}' (expected 'stable' or 'always')",
                other
            )),
        }
    }
}
