//! Shared value types.

use serde::{Deserialize, Serialize};

/// Newtype for a SHA256 hash string (64 hex characters).
///
/// Checksums are transcribed from upstream release digests, so the plain
/// constructor skips validation; `validated` enforces the 64-hex-char shape
/// when the caller wants it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Sha256Hash(String);

impl Sha256Hash {
    /// Create a new `Sha256Hash` without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Create a validated `Sha256Hash` (64 hex characters).
    pub fn validated(s: &str) -> Result<Self, String> {
        if s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!(
                "Invalid SHA256 hash: expected 64 hex chars, got '{s}'"
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sha256Hash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Sha256Hash {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Sha256Hash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The resolved download for one platform: URL plus content checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub url: String,
    pub sha256: Sha256Hash,
}
