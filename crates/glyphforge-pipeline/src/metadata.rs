//! Provenance metadata attached to a rendered pattern.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;

/// Metadata describing one render: what was drawn, under which license
/// tag, and when. Logically separate from the art text; the signer
/// operates on a byte-exact concatenation of both.
///
/// The encryption key is deliberately not part of the metadata; the text
/// rendering prints a `(hidden)` placeholder in its slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceMetadata {
    pub pattern: String,
    pub size: u32,
    pub threads: u32,
    pub license: String,
    pub version: String,
    /// Unix timestamp (seconds) taken when the metadata was assembled.
    pub generated_at: u64,
}

impl ProvenanceMetadata {
    /// Assemble metadata for a render of `config`, stamped with the
    /// current wall-clock time.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            pattern: config.pattern.clone(),
            size: config.size,
            threads: config.threads,
            license: config.license.clone(),
            version: config.version.clone(),
            generated_at: unix_now(),
        }
    }
}

impl std::fmt::Display for ProvenanceMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pattern: {}\nSize: {}\nThreads: {}\nEncryptionKey: (hidden)\nLicense: {}\nVersion: {}\nGeneratedAt: {}",
            self.pattern, self.size, self.threads, self.license, self.version, self.generated_at,
        )
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
