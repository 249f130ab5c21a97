//! Checksum Value Object
//!
//! A validated, immutable hash of a module's fingerprint file.
//! Used only for equality between runs, never for security.

use std::fmt;

use sha2::{Digest, Sha256};

/// Fingerprint checksum value object
///
/// Wraps a SHA-256 hex digest with the `sha256:` prefix. Digests of other
/// lengths read from old records are kept verbatim and unprefixed; they never
/// equal a freshly computed checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum(String);

impl Checksum {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    const SHA256_HEX_LEN: usize = 64;

    /// Create a Checksum from a stored string (with or without prefix)
    pub fn new(raw: &str) -> Self {
        if raw.starts_with(Self::PREFIX) || !Self::is_sha256_hex(raw) {
            Self(raw.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw))
        }
    }

    fn is_sha256_hex(raw: &str) -> bool {
        raw.len() == Self::SHA256_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Stored digest from another algorithm
    pub fn is_legacy(&self) -> bool {
        !self.0.starts_with(Self::PREFIX)
    }

    /// Compute the checksum of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Full checksum string as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Checksum {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Checksum {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
