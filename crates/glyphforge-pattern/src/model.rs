//! Data model shared by the generators and the registry.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Pattern kind
// ─────────────────────────────────────────────

/// The closed set of registered pattern names.
///
/// The *name set* is closed (adding a kind means adding a variant here),
/// but the behavior behind each name is open: the registry hands out
/// [`crate::PatternGenerator`] trait objects, so callers never match on
/// the kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Recursive branching tree (`Y` / `|` markers).
    FractalTree,
    /// Elementary cellular automaton rows.
    CellularAutomata,
    /// L-system grammar rewriting.
    LSystem,
    /// Banded fill: growing rows of glyphs.
    Triangle,
    /// Banded fill: symmetric diamond.
    Diamond,
    /// Banded fill: inverted-then-restored diamond.
    Hourglass,
}

impl PatternKind {
    /// Case-insensitive lookup of a pattern name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fractaltree" => Some(Self::FractalTree),
            "cellularautomata" => Some(Self::CellularAutomata),
            "lsystem" => Some(Self::LSystem),
            "triangle" => Some(Self::Triangle),
            "diamond" => Some(Self::Diamond),
            "hourglass" => Some(Self::Hourglass),
            _ => None,
        }
    }

    /// Canonical lowercase name, as accepted by [`parse`](Self::parse).
    pub fn name(&self) -> &'static str {
        match self {
            Self::FractalTree => "fractaltree",
            Self::CellularAutomata => "cellularautomata",
            Self::LSystem => "lsystem",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::Hourglass => "hourglass",
        }
    }

    /// Whether generation for this kind is dispatched to a render worker.
    ///
    /// Only the fractal tree asks for a worker; its output is identical
    /// either way. The flag affects scheduling, never content.
    pub fn uses_worker(&self) -> bool {
        matches!(self, Self::FractalTree)
    }
}

// ─────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────

/// Parameters for one generator invocation, owned by the caller and passed
/// by value through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRequest {
    pub kind: PatternKind,
    /// Primary size parameter: recursion depth for the fractal tree,
    /// row count for the banded shapes. Must be ≥ 1 at the configuration
    /// boundary (depth 0 is still well-defined: empty output).
    pub size: u32,
    /// Iteration count read by the automaton (generations) and the grammar
    /// (rewrite passes).
    pub iterations: u32,
    /// Scheduling hint for worker dispatch. Never changes output.
    pub workers: u32,
}

impl PatternRequest {
    /// Build a request the way the configuration layer does: a single
    /// `size` value serves as both size and iteration count.
    pub fn new(kind: PatternKind, size: u32, workers: u32) -> Self {
        Self { kind, size, iterations: size, workers }
    }

    /// Override the iteration count independently of `size`.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

// ─────────────────────────────────────────────
// Glyph style
// ─────────────────────────────────────────────

/// Fill glyph used by the banded shapes.
///
/// Carried as a value (the registry owns one) rather than process-global
/// state, so concurrent pipelines with different themes cannot interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphStyle {
    #[default]
    Star,
    Plus,
    At,
    Hash,
}

impl GlyphStyle {
    /// Case-insensitive theme lookup; unknown themes fall back to [`Star`](Self::Star).
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "plus" => Self::Plus,
            "at" => Self::At,
            "hash" => Self::Hash,
            _ => Self::Star,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Self::Star => '*',
            Self::Plus => '+',
            Self::At => '@',
            Self::Hash => '#',
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
