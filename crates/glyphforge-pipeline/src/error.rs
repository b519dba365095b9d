//! Pipeline error taxonomy.
//!
//! Every stage failure maps to exactly one variant, so callers can tell a
//! bad configuration from an unknown pattern from a dead worker from a
//! broken crypto subsystem. Failures surface synchronously to the caller
//! of [`crate::render`]; none abort the process, and none are replaced by
//! placeholder output.

use thiserror::Error;

use glyphforge_pattern::RegistryError;
use glyphforge_provenance::EnvelopeError;

use crate::config::ConfigError;
use crate::coordinator::CoordinatorError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed configuration input; nothing was generated.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The requested pattern name has no registered generator.
    #[error(transparent)]
    PatternNotFound(#[from] RegistryError),

    /// The render worker failed; generation is deterministic, so the
    /// pipeline reports instead of retrying.
    #[error("generation failed: {0}")]
    Generation(#[from] CoordinatorError),

    /// The provenance envelope could not be produced.
    #[error("provenance encryption failed: {0}")]
    Encryption(#[from] EnvelopeError),
}
