//! Document Diff Engine
//!
//! Compares two plain-text documents at line granularity and produces the
//! complete [`DocumentComparison`]: annotated line diff, character-level
//! similarity ratio, and side-by-side alignment. Pure function of its two
//! inputs; total over all string content including empty documents.

use crate::diff::matcher::{OpTag, Opcode, SequenceMatcher};
use crate::value_objects::{AlignedPair, DiffLine, DocumentComparison};

/// Deterministic line-oriented diff engine
pub struct DiffEngine;

impl DiffEngine {
    /// Compare a source document against a target document.
    ///
    /// Returns the line-level diff in reading order, the similarity ratio
    /// over the full character sequences, and the side-by-side alignment.
    /// Never fails: empty inputs yield an empty diff, similarity `1.0`,
    /// and an empty alignment.
    pub fn compare(source: &str, target: &str) -> DocumentComparison {
        let source_lines: Vec<&str> = source.lines().collect();
        let target_lines: Vec<&str> = target.lines().collect();

        let line_matcher = SequenceMatcher::new(&source_lines, &target_lines);
        let opcodes = line_matcher.opcodes();

        let diff = Self::line_diff(&opcodes, &source_lines, &target_lines);
        let alignment = Self::align(&opcodes, &source_lines, &target_lines);

        // Similarity is computed over characters, not lines, so moving a
        // word across a line break still counts as overlap.
        let source_chars: Vec<char> = source.chars().collect();
        let target_chars: Vec<char> = target.chars().collect();
        let similarity = SequenceMatcher::new(&source_chars, &target_chars).ratio();

        DocumentComparison {
            diff,
            similarity,
            alignment,
        }
    }

    /// Annotated line diff from opcode runs. A `Replace` run emits its
    /// deleted lines followed by its inserted lines.
    fn line_diff(opcodes: &[Opcode], source: &[&str], target: &[&str]) -> Vec<DiffLine> {
        let mut diff = Vec::new();
        for op in opcodes {
            match op.tag {
                OpTag::Equal => {
                    diff.extend(source[op.i1..op.i2].iter().map(|l| DiffLine::equal(*l)));
                }
                OpTag::Replace => {
                    diff.extend(source[op.i1..op.i2].iter().map(|l| DiffLine::deleted(*l)));
                    diff.extend(target[op.j1..op.j2].iter().map(|l| DiffLine::inserted(*l)));
                }
                OpTag::Delete => {
                    diff.extend(source[op.i1..op.i2].iter().map(|l| DiffLine::deleted(*l)));
                }
                OpTag::Insert => {
                    diff.extend(target[op.j1..op.j2].iter().map(|l| DiffLine::inserted(*l)));
                }
            }
        }
        diff
    }

    /// Side-by-side alignment from opcode runs.
    ///
    /// `Equal` runs emit paired entries on both sides. `Replace` runs zip
    /// the two ranges pairwise; when the ranges differ in length, only the
    /// zipped prefix produces entries and the longer range's tail is
    /// dropped from the view. That truncation is intentional and must be
    /// preserved. `Delete`/`Insert` runs emit one-sided entries.
    fn align(opcodes: &[Opcode], source: &[&str], target: &[&str]) -> AlignedPair {
        let mut pair = AlignedPair::default();
        for op in opcodes {
            match op.tag {
                OpTag::Equal => {
                    for (left, right) in source[op.i1..op.i2].iter().zip(&target[op.j1..op.j2]) {
                        pair.left.push(DiffLine::equal(*left));
                        pair.right.push(DiffLine::equal(*right));
                    }
                }
                OpTag::Replace => {
                    for (left, right) in source[op.i1..op.i2].iter().zip(&target[op.j1..op.j2]) {
                        pair.left.push(DiffLine::deleted(*left));
                        pair.right.push(DiffLine::inserted(*right));
                    }
                }
                OpTag::Delete => {
                    for left in &source[op.i1..op.i2] {
                        pair.left.push(DiffLine::deleted(*left));
                    }
                }
                OpTag::Insert => {
                    for right in &target[op.j1..op.j2] {
                        pair.right.push(DiffLine::inserted(*right));
                    }
                }
            }
        }
        pair
    }
}
