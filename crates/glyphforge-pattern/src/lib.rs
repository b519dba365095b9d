//! `glyphforge-pattern` — procedural ASCII pattern generators.
//!
//! ## Crate structure
//!
//! | Module        | Responsibility                                            |
//! |---------------|-----------------------------------------------------------|
//! | [`automaton`] | Elementary cellular automaton rows                        |
//! | [`branch`]    | Recursive fractal-tree branching                          |
//! | [`grammar`]   | L-system string rewriting                                 |
//! | [`model`]     | [`PatternKind`], [`PatternRequest`], [`GlyphStyle`]       |
//! | [`registry`]  | Case-insensitive name → [`PatternGenerator`] lookup       |
//! | [`shapes`]    | Banded fill shapes (triangle, diamond, hourglass)         |
//!
//! ## Quick start
//!
//! ```rust
//! use glyphforge_pattern::{GeneratorRegistry, GlyphStyle, PatternGenerator, PatternRequest};
//!
//! let registry = GeneratorRegistry::new(GlyphStyle::Star);
//! let (kind, generator) = registry.lookup("CellularAutomata").unwrap();
//! let art = generator.generate(&PatternRequest::new(kind, 4, 1));
//! assert_eq!(art.lines().count(), 4);
//! ```
//!
//! Every generator is a deterministic pure function of its request: same
//! request, same text, no cross-call state.

pub mod automaton;
pub mod branch;
pub mod grammar;
pub mod model;
pub mod registry;
pub mod shapes;

pub use automaton::CellularAutomaton;
pub use branch::FractalTree;
pub use grammar::LSystem;
pub use model::{GlyphStyle, PatternKind, PatternRequest};
pub use registry::{GeneratorRegistry, PatternGenerator, RegistryError};
pub use shapes::{Diamond, Hourglass, Triangle};
