//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`DiffTag`] | Classification of a line in a diff (equal/deleted/inserted) |
//! | [`DiffLine`] | A tagged line of text from a document comparison |
//! | [`AlignedPair`] | Side-by-side view of two compared documents |
//! | [`DocumentComparison`] | Full output of a document comparison |
//! | [`EntityMap`] | Named entities grouped by category label |

/// Diff-related value objects
pub mod diff;
/// Named-entity value objects
pub mod entity;

pub use diff::{AlignedPair, DiffLine, DiffTag, DocumentComparison};
pub use entity::EntityMap;
