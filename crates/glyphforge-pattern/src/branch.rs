//! Recursive fractal-tree branching.
//!
//! Each node emits a `Y` marker at the current indentation, recurses into
//! its left branch, emits a `|` separator, then recurses into its right
//! branch, shifting two columns right per level. The recursion is pure and
//! single-threaded; the request's `workers` field only tells the pipeline
//! how to *schedule* the one generation call.

use crate::model::PatternRequest;
use crate::registry::PatternGenerator;

/// Columns of indentation added per recursion level.
const INDENT_STEP: usize = 2;

/// Recursive-branch generator. Depth comes from [`PatternRequest::size`];
/// depth 0 produces empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalTree;

impl FractalTree {
    fn draw(depth: u32, indent: usize, out: &mut String) {
        if depth == 0 {
            return;
        }
        push_line(out, indent, 'Y');
        Self::draw(depth - 1, indent + INDENT_STEP, out);
        push_line(out, indent, '|');
        Self::draw(depth - 1, indent + INDENT_STEP, out);
    }
}

impl PatternGenerator for FractalTree {
    fn generate(&self, request: &PatternRequest) -> String {
        let mut out = String::new();
        Self::draw(request.size, 0, &mut out);
        out
    }
}

fn push_line(out: &mut String, indent: usize, marker: char) {
    for _ in 0..indent {
        out.push(' ');
    }
    out.push(marker);
    out.push('\n');
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
