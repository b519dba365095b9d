//! Case-insensitive name → generator lookup.

use thiserror::Error;

use crate::automaton::CellularAutomaton;
use crate::branch::FractalTree;
use crate::grammar::LSystem;
use crate::model::{GlyphStyle, PatternKind, PatternRequest};
use crate::shapes::{Diamond, Hourglass, Triangle};

/// A deterministic function from a [`PatternRequest`] to ASCII text.
///
/// Implementations hold no cross-call state: two calls with the same
/// request produce byte-identical output. `Send` lets the pipeline move a
/// generator into a render worker.
pub trait PatternGenerator: Send {
    fn generate(&self, request: &PatternRequest) -> String;
}

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested name has no registered generator. Reported before any
    /// generation happens, so callers get a typed "no result" and never
    /// partial output.
    #[error("no generator registered for pattern `{0}`")]
    PatternNotFound(String),
}

/// Maps pattern names to generators.
///
/// Generators are constructed lazily, one per successful lookup; the
/// registry itself only carries the glyph style the banded shapes draw
/// with.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorRegistry {
    style: GlyphStyle,
}

impl GeneratorRegistry {
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }

    /// Resolve `name` (case-insensitive) to its kind and a fresh generator.
    pub fn lookup(&self, name: &str) -> Result<(PatternKind, Box<dyn PatternGenerator>), RegistryError> {
        let kind = PatternKind::parse(name)
            .ok_or_else(|| RegistryError::PatternNotFound(name.to_string()))?;
        Ok((kind, self.construct(kind)))
    }

    /// Construct a generator for an already-resolved kind.
    pub fn construct(&self, kind: PatternKind) -> Box<dyn PatternGenerator> {
        match kind {
            PatternKind::FractalTree => Box::new(FractalTree),
            PatternKind::CellularAutomata => Box::new(CellularAutomaton),
            PatternKind::LSystem => Box::new(LSystem::default()),
            PatternKind::Triangle => Box::new(Triangle::new(self.style)),
            PatternKind::Diamond => Box::new(Diamond::new(self.style)),
            PatternKind::Hourglass => Box::new(Hourglass::new(self.style)),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
