//! Diff Engine
//!
//! Deterministic, reproducible text comparison at line granularity.
//! Built on a longest-matching-blocks sequence matcher ([`SequenceMatcher`])
//! that yields matching blocks, opcode runs, and a similarity ratio; the
//! engine ([`DiffEngine`]) derives the annotated line diff and the
//! side-by-side alignment from line-level opcodes and the similarity score
//! from a character-level match.

/// Diff engine over whole documents
pub mod engine;
/// Longest-matching-blocks sequence matcher
pub mod matcher;

pub use engine::DiffEngine;
pub use matcher::{Match, OpTag, Opcode, SequenceMatcher};
