//! Banded fill shapes drawn with the configured glyph.
//!
//! These are the simple row-by-row patterns from the original registry:
//! a growing triangle, a symmetric diamond, and an hourglass. The diamond
//! and hourglass need an odd size to center properly, so even sizes round
//! up to the next odd value.

use crate::model::{GlyphStyle, PatternRequest};
use crate::registry::PatternGenerator;

/// Growing rows: row `i` holds `i` glyphs, for `i` in `1..=size`.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    style: GlyphStyle,
}

impl Triangle {
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }
}

impl PatternGenerator for Triangle {
    fn generate(&self, request: &PatternRequest) -> String {
        let glyph = self.style.glyph();
        let mut out = String::new();
        for row in 1..=request.size as usize {
            push_band(&mut out, 0, row, glyph);
        }
        out
    }
}

/// Centered diamond: odd band widths `1, 3, …, size, …, 3, 1`.
#[derive(Debug, Clone, Copy)]
pub struct Diamond {
    style: GlyphStyle,
}

impl Diamond {
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }
}

impl PatternGenerator for Diamond {
    fn generate(&self, request: &PatternRequest) -> String {
        let size = round_up_to_odd(request.size as usize);
        let glyph = self.style.glyph();
        let mut out = String::new();
        for band in (1..=size).step_by(2) {
            push_band(&mut out, (size - band) / 2, band, glyph);
        }
        for band in (1..=size.saturating_sub(2)).rev().step_by(2) {
            push_band(&mut out, (size - band) / 2, band, glyph);
        }
        out
    }
}

/// Hourglass: the diamond's bands in narrowing-then-widening order.
#[derive(Debug, Clone, Copy)]
pub struct Hourglass {
    style: GlyphStyle,
}

impl Hourglass {
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }
}

impl PatternGenerator for Hourglass {
    fn generate(&self, request: &PatternRequest) -> String {
        let size = round_up_to_odd(request.size as usize);
        let glyph = self.style.glyph();
        let mut out = String::new();
        for band in (1..=size).rev().step_by(2) {
            push_band(&mut out, (size - band) / 2, band, glyph);
        }
        for band in (3..=size).step_by(2) {
            push_band(&mut out, (size - band) / 2, band, glyph);
        }
        out
    }
}

fn round_up_to_odd(size: usize) -> usize {
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

fn push_band(out: &mut String, pad: usize, width: usize, glyph: char) {
    for _ in 0..pad {
        out.push(' ');
    }
    for _ in 0..width {
        out.push(glyph);
    }
    out.push('\n');
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
