//! Elementary cellular automaton rows.
//!
//! A row of `2g + 1` binary cells starts with only the center cell set.
//! Each generation emits the row (`#` for a live cell, space otherwise)
//! and then computes the next row synchronously with the local rule
//!
//! ```text
//! next[i] = current[i-1] XOR (current[i] OR current[i+1])
//! ```
//!
//! for interior cells. The two boundary cells are pinned at 0 and never
//! recomputed, so the triangle of live cells grows inside a fixed-width
//! frame. No randomness, no concurrency: the output is a pure function of
//! the generation count.

use crate::model::PatternRequest;
use crate::registry::PatternGenerator;

/// Glyph for a live cell.
const LIVE: char = '#';

/// Cellular-automaton generator. The generation count comes from
/// [`PatternRequest::iterations`] and is expected to be ≥ 1; the output has
/// exactly that many lines, each `2 * generations + 1` wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellularAutomaton;

impl PatternGenerator for CellularAutomaton {
    fn generate(&self, request: &PatternRequest) -> String {
        let generations = request.iterations as usize;
        let width = 2 * generations + 1;

        let mut current = vec![0u8; width];
        current[width / 2] = 1;

        let mut out = String::with_capacity(generations * (width + 1));
        for _ in 0..generations {
            for &cell in &current {
                out.push(if cell == 1 { LIVE } else { ' ' });
            }
            out.push('\n');

            let mut next = vec![0u8; width];
            for i in 1..width - 1 {
                next[i] = (current[i - 1] ^ (current[i] | current[i + 1])) & 1;
            }
            current = next;
        }
        out
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PatternKind;

    fn art(generations: u32) -> String {
        CellularAutomaton
            .generate(&PatternRequest::new(PatternKind::CellularAutomata, generations, 1))
    }

    #[test]
    fn line_count_and_width_are_fixed() {
        for g in 1..=8u32 {
            let text = art(g);
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), g as usize, "line count for g={g}");
            for line in &lines {
                assert_eq!(line.len(), 2 * g as usize + 1, "row width for g={g}");
            }
        }
    }

    #[test]
    fn first_row_is_a_single_centered_cell() {
        let text = art(4);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "    #    ");
        assert_eq!(first.len(), 9);
    }

    #[test]
    fn boundary_cells_stay_blank() {
        for g in 1..=8u32 {
            for line in art(g).lines() {
                assert!(line.starts_with(' '), "left boundary live at g={g}");
                assert!(line.ends_with(' '), "right boundary live at g={g}");
            }
        }
    }

    #[test]
    fn second_row_follows_the_local_rule() {
        // Row 0: single center cell. Interior update at the two cells
        // flanking the center: left gets 0^(0|1)=1, center 0^(1|0)=1,
        // right 1^(0|0)=1.
        let text = art(3);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "   #   ");
        assert_eq!(rows[1], "  ###  ");
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(art(6), art(6));
    }
}
