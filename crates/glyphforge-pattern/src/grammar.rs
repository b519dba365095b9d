//! L-system string rewriting.
//!
//! Starts from the axiom `F` and applies the rule table to every symbol of
//! the current string in left-to-right order, producing the next string;
//! symbols without a rule copy through unchanged. One pass per iteration.
//!
//! The fixed rule `F → F+F-F-F+F` expands fivefold per pass, so the output
//! length is `5^n` for `n` iterations. Bounding `n` is the caller's job;
//! the generator does not enforce a ceiling.

use std::collections::HashMap;

use crate::model::PatternRequest;
use crate::registry::PatternGenerator;

/// Starting symbol for every rewrite.
pub const AXIOM: &str = "F";

/// Grammar-rewrite generator holding an immutable symbol → replacement
/// table. [`PatternRequest::iterations`] selects the number of passes;
/// zero passes return the axiom unchanged.
#[derive(Debug, Clone)]
pub struct LSystem {
    rules: HashMap<char, &'static str>,
}

impl Default for LSystem {
    /// The quadratic-Koch-style rule set of the original engine.
    fn default() -> Self {
        Self { rules: HashMap::from([('F', "F+F-F-F+F")]) }
    }
}

impl LSystem {
    /// One full rewrite pass over `input`.
    fn rewrite(&self, input: &str) -> String {
        let mut next = String::with_capacity(input.len());
        for symbol in input.chars() {
            match self.rules.get(&symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        next
    }
}

impl PatternGenerator for LSystem {
    fn generate(&self, request: &PatternRequest) -> String {
        let mut current = AXIOM.to_string();
        for _ in 0..request.iterations {
            current = self.rewrite(current.as_str());
        }
        current
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
