//! `glyphforge-pipeline` — from a parsed configuration to a signed render.
//!
//! ## Crate structure
//!
//! | Module          | Responsibility                                        |
//! |-----------------|-------------------------------------------------------|
//! | [`config`]      | `key: value` configuration block → [`RenderConfig`]   |
//! | [`coordinator`] | One-shot render worker with a blocking join           |
//! | [`engine`]      | Orchestration: lookup → generate → sign → bundle      |
//! | [`error`]       | [`PipelineError`] taxonomy                            |
//! | [`metadata`]    | [`ProvenanceMetadata`] assembly and text rendering    |
//!
//! ## Quick start
//!
//! ```rust
//! use glyphforge_pipeline::{render, RenderConfig};
//!
//! let config = RenderConfig::parse("pattern: cellularAutomata\nsize: 4\n").unwrap();
//! let bundle = render(&config).unwrap();
//! assert_eq!(bundle.art.lines().count(), 4);
//! assert_eq!(bundle.fingerprint_hex().len(), 64);
//! assert!(bundle.envelope.is_none()); // no encryptionKey configured
//! ```
//!
//! Every failure is a [`PipelineError`] variant; no stage ever substitutes
//! a placeholder string for a failed result.

pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod metadata;

pub use config::{ConfigError, RenderConfig};
pub use coordinator::{run_on_worker, CoordinatorError};
pub use engine::{render, RenderBundle};
pub use error::PipelineError;
pub use metadata::ProvenanceMetadata;
