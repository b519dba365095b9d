//! Declarative render configuration.
//!
//! The input is a `key: value`-per-line text block:
//!
//! ```text
//! pattern: fractalTree
//! size: 6
//! threads: 4
//! encryptionKey: SecretKey1234567
//! license: GPL-3.0
//! version: 2.0
//! ```
//!
//! Keys are case-insensitive; unrecognized keys are ignored; lines without
//! a `:` are skipped. Malformed integers are a [`ConfigError`] and abort
//! the pipeline before any generation. Missing keys fall back to the
//! defaults below.
//!
//! | Key             | Default    |
//! |-----------------|------------|
//! | `pattern`       | `triangle` |
//! | `size`          | `5`        |
//! | `threads`       | `1`        |
//! | `theme`         | `star`     |
//! | `encryptionkey` | *(absent — no envelope is produced)* |
//! | `license`       | `MIT`      |
//! | `version`       | `1.0`      |

use glyphforge_pattern::GlyphStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer for `{key}`: `{value}`")]
    InvalidInteger { key: &'static str, value: String },

    #[error("`{key}` must be at least 1 (got {value})")]
    OutOfRange { key: &'static str, value: u32 },
}

/// One pipeline invocation's configuration, built once and then immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Registered pattern name (matched case-insensitively).
    pub pattern: String,
    /// Size / depth / generation count, per pattern kind. Must be ≥ 1.
    pub size: u32,
    /// Worker-count hint for coordinated generation. Must be ≥ 1.
    pub threads: u32,
    /// Fill glyph for the banded shapes.
    pub theme: GlyphStyle,
    /// Provenance encryption key. `None` means no envelope is requested.
    pub encryption_key: Option<String>,
    pub license: String,
    pub version: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pattern: "triangle".to_string(),
            size: 5,
            threads: 1,
            theme: GlyphStyle::Star,
            encryption_key: None,
            license: "MIT".to_string(),
            version: "1.0".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse a `key: value` configuration block.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in input.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();
            match key.as_str() {
                "pattern" => config.pattern = value.to_string(),
                "size" => config.size = parse_int("size", value)?,
                "threads" => config.threads = parse_int("threads", value)?,
                "theme" => config.theme = GlyphStyle::parse(value),
                "encryptionkey" => {
                    config.encryption_key = (!value.is_empty()).then(|| value.to_string());
                }
                "license" => config.license = value.to_string(),
                "version" => config.version = value.to_string(),
                _ => {} // unrecognized keys are ignored
            }
        }

        if config.size < 1 {
            return Err(ConfigError::OutOfRange { key: "size", value: config.size });
        }
        if config.threads < 1 {
            return Err(ConfigError::OutOfRange { key: "threads", value: config.threads });
        }
        Ok(config)
    }
}

fn parse_int(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidInteger { key, value: value.to_string() })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
