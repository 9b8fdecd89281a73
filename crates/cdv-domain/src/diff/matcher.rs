//! Longest-Matching-Blocks Sequence Matcher
//!
//! Generic sequence matcher comparing two ordered sequences of hashable
//! elements. Finds the longest contiguous matching block, recursively
//! matches the regions to its left and right, and derives from the
//! resulting block set both the opcode runs (`equal`/`replace`/`delete`/
//! `insert`) and the similarity ratio `2*M / T`, where `M` is the total
//! matched length and `T` the combined length of both sequences.
//!
//! Matching is deterministic: ties prefer the earliest block in the first
//! sequence, so repeated runs over the same input produce identical output.

use std::collections::HashMap;
use std::hash::Hash;

/// A contiguous matching block: `a[a..a+size] == b[b..b+size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start offset in the first sequence
    pub a: usize,
    /// Start offset in the second sequence
    pub b: usize,
    /// Number of matching elements
    pub size: usize,
}

/// Classification of an opcode run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// `a[i1..i2] == b[j1..j2]`
    Equal,
    /// `a[i1..i2]` should be replaced by `b[j1..j2]`
    Replace,
    /// `a[i1..i2]` should be deleted (`j1 == j2`)
    Delete,
    /// `b[j1..j2]` should be inserted at `i1` (`i1 == i2`)
    Insert,
}

/// A tagged run over corresponding ranges of the two sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Run classification
    pub tag: OpTag,
    /// Start of the run in the first sequence
    pub i1: usize,
    /// End of the run in the first sequence (exclusive)
    pub i2: usize,
    /// Start of the run in the second sequence
    pub j1: usize,
    /// End of the run in the second sequence (exclusive)
    pub j2: usize,
}

/// Sequence matcher over two borrowed slices
pub struct SequenceMatcher<'a, T: Eq + Hash> {
    a: &'a [T],
    b: &'a [T],
    /// Element of `b` -> ascending positions where it occurs
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Create a matcher over the two sequences
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, element) in b.iter().enumerate() {
            b2j.entry(element).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Find the longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Of all maximal matching blocks, returns the one starting earliest in
    /// `a`, and of those the one starting earliest in `b`. Returns a
    /// zero-size match at `(alo, blo)` when the regions share no elements.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let mut best = Match {
            a: alo,
            b: blo,
            size: 0,
        };
        // j2len[j] = length of the longest match ending at a[i], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                    } else {
                        1
                    };
                    new_j2len.insert(j, k);
                    if k > best.size {
                        best = Match {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = new_j2len;
        }

        best
    }

    /// All matching blocks, ascending in both sequences, with adjacent
    /// blocks merged. The final entry is always the zero-size sentinel
    /// `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0usize, la, 0usize, lb)];
        let mut found: Vec<Match> = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size > 0 {
                found.push(m);
                if alo < m.a && blo < m.b {
                    queue.push((alo, m.a, blo, m.b));
                }
                if m.a + m.size < ahi && m.b + m.size < bhi {
                    queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
                }
            }
        }
        found.sort_unstable_by_key(|m| (m.a, m.b));

        // Merge blocks that are adjacent in both sequences
        let mut blocks: Vec<Match> = Vec::with_capacity(found.len() + 1);
        let (mut i1, mut j1, mut k1) = (0usize, 0usize, 0usize);
        for m in found {
            if i1 + k1 == m.a && j1 + k1 == m.b {
                k1 += m.size;
            } else {
                if k1 > 0 {
                    blocks.push(Match {
                        a: i1,
                        b: j1,
                        size: k1,
                    });
                }
                (i1, j1, k1) = (m.a, m.b, m.size);
            }
        }
        if k1 > 0 {
            blocks.push(Match {
                a: i1,
                b: j1,
                size: k1,
            });
        }

        blocks.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        blocks
    }

    /// Tagged opcode runs describing how to turn the first sequence into
    /// the second. Runs are contiguous and cover both sequences completely.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0usize, 0usize);

        for block in self.matching_blocks() {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                ops.push(Opcode {
                    tag,
                    i1: i,
                    i2: block.a,
                    j1: j,
                    j2: block.b,
                });
            }
            i = block.a + block.size;
            j = block.b + block.size;
            if block.size > 0 {
                ops.push(Opcode {
                    tag: OpTag::Equal,
                    i1: block.a,
                    i2: i,
                    j1: block.b,
                    j2: j,
                });
            }
        }
        ops
    }

    /// Similarity ratio `2*M / T` in `[0.0, 1.0]`.
    ///
    /// `M` is the total size of all matching blocks and `T` the combined
    /// length of both sequences. Two empty sequences have ratio `1.0` by
    /// convention (`0/0` is defined as identity).
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matches as f64 / total as f64
    }
}
