//! # Contract Diff Validator - Domain Layer
//!
//! Core business logic and types for comparing contract documents.
//! This crate is pure: it has no I/O, no async runtime, and no external
//! service dependencies. It provides:
//!
//! - The diff engine: line-level diff, character-level similarity ratio,
//!   and side-by-side alignment ([`diff::DiffEngine`])
//! - Value objects shared across layers ([`value_objects`])
//! - The unified error type ([`error::Error`])
//! - Domain constants ([`constants`])

/// Domain layer constants
pub mod constants;
/// Diff engine - sequence matching, line diff, alignment, similarity
pub mod diff;
/// Error handling types
pub mod error;
/// Domain value objects
pub mod value_objects;

pub use diff::DiffEngine;
pub use error::{Error, Result};
pub use value_objects::{AlignedPair, DiffLine, DiffTag, DocumentComparison, EntityMap};
