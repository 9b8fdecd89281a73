//! Diff Value Objects
//!
//! Value objects produced by the diff engine: tagged lines, the
//! side-by-side alignment, and the complete comparison result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Diff Line Classification
///
/// Tags a line of a compared document. `Deleted` lines exist only in the
/// source document, `Inserted` lines only in the target, `Equal` lines in
/// both. Renders to the classic two-character prefix marker convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    /// Line is present in both documents
    Equal,
    /// Line is present only in the source document
    Deleted,
    /// Line is present only in the target document
    Inserted,
}

impl DiffTag {
    /// Two-character prefix marker for rendered diff output
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Equal => "  ",
            Self::Deleted => "- ",
            Self::Inserted => "+ ",
        }
    }
}

/// Value Object: Tagged Diff Line
///
/// A single line of text carrying its diff classification. Ordering of
/// diff lines matches a left-to-right, top-to-bottom reading of the two
/// documents and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Classification of this line
    pub tag: DiffTag,
    /// The original line text, without markers
    pub text: String,
}

impl DiffLine {
    /// Create an `Equal` line
    pub fn equal<S: Into<String>>(text: S) -> Self {
        Self {
            tag: DiffTag::Equal,
            text: text.into(),
        }
    }

    /// Create a `Deleted` line
    pub fn deleted<S: Into<String>>(text: S) -> Self {
        Self {
            tag: DiffTag::Deleted,
            text: text.into(),
        }
    }

    /// Create an `Inserted` line
    pub fn inserted<S: Into<String>>(text: S) -> Self {
        Self {
            tag: DiffTag::Inserted,
            text: text.into(),
        }
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.marker(), self.text)
    }
}

/// Value Object: Side-by-Side Alignment
///
/// Two parallel ordered sequences of tagged lines for rendering a
/// side-by-side comparison. The left side holds `Equal`/`Deleted` entries,
/// the right side `Equal`/`Inserted` entries. Lengths may differ when
/// insertions and deletions are unbalanced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Lines of the source document view
    pub left: Vec<DiffLine>,
    /// Lines of the target document view
    pub right: Vec<DiffLine>,
}

impl AlignedPair {
    /// True when both sides are empty
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Value Object: Document Comparison Result
///
/// Complete output of comparing a source document against a target:
/// the annotated line diff, the character-level similarity ratio, and the
/// side-by-side alignment. Request-scoped; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentComparison {
    /// Line-level annotated diff in reading order
    pub diff: Vec<DiffLine>,
    /// Similarity ratio in `[0.0, 1.0]`; `1.0` means character-identical
    pub similarity: f64,
    /// Side-by-side alignment for rendering
    pub alignment: AlignedPair,
}

impl DocumentComparison {
    /// Difference lines only (deleted and inserted), rendered with their
    /// prefix markers, in diff order. This is the sequence fed to the
    /// analysis pipeline.
    pub fn difference_lines(&self) -> Vec<String> {
        self.diff
            .iter()
            .filter(|line| line.tag != DiffTag::Equal)
            .map(ToString::to_string)
            .collect()
    }

    /// Rendered diff including unchanged lines, one marker-prefixed string
    /// per line.
    pub fn rendered_diff(&self) -> Vec<String> {
        self.diff.iter().map(ToString::to_string).collect()
    }
}
