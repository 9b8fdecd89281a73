//! Unit tests for the longest-matching-blocks sequence matcher

use cdv_domain::diff::{Match, OpTag, SequenceMatcher};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_identical_sequences_single_block() {
    let a = chars("abcd");
    let b = chars("abcd");
    let matcher = SequenceMatcher::new(&a, &b);

    let blocks = matcher.matching_blocks();
    assert_eq!(
        blocks,
        vec![
            Match { a: 0, b: 0, size: 4 },
            Match { a: 4, b: 4, size: 0 },
        ]
    );
    assert_eq!(matcher.ratio(), 1.0);
}

#[test]
fn test_overlapping_sequences_ratio() {
    // Matched blocks total 3 ("bcd"), combined length 8: ratio = 6/8
    let a = chars("abcd");
    let b = chars("bcde");
    let matcher = SequenceMatcher::new(&a, &b);
    assert_eq!(matcher.ratio(), 0.75);
}

#[test]
fn test_disjoint_sequences() {
    let a = chars("abc");
    let b = chars("xyz");
    let matcher = SequenceMatcher::new(&a, &b);

    assert_eq!(matcher.ratio(), 0.0);
    let blocks = matcher.matching_blocks();
    assert_eq!(blocks, vec![Match { a: 3, b: 3, size: 0 }]);
}

#[test]
fn test_empty_sequences_ratio_is_one() {
    let a: Vec<char> = Vec::new();
    let b: Vec<char> = Vec::new();
    let matcher = SequenceMatcher::new(&a, &b);
    assert_eq!(matcher.ratio(), 1.0);
    assert_eq!(matcher.opcodes(), vec![]);
}

#[test]
fn test_one_empty_sequence_ratio_is_zero() {
    let a = chars("abc");
    let b: Vec<char> = Vec::new();
    let matcher = SequenceMatcher::new(&a, &b);
    assert_eq!(matcher.ratio(), 0.0);
}

#[test]
fn test_opcodes_cover_both_sequences() {
    let a = chars("qabxcd");
    let b = chars("abycdf");
    let matcher = SequenceMatcher::new(&a, &b);
    let ops = matcher.opcodes();

    // Runs must be contiguous and cover both sequences completely
    let mut i = 0;
    let mut j = 0;
    for op in &ops {
        assert_eq!(op.i1, i);
        assert_eq!(op.j1, j);
        i = op.i2;
        j = op.j2;
    }
    assert_eq!(i, a.len());
    assert_eq!(j, b.len());
}

#[test]
fn test_opcode_tags_for_mixed_edit() {
    let a = chars("qabxcd");
    let b = chars("abycdf");
    let matcher = SequenceMatcher::new(&a, &b);
    let tags: Vec<OpTag> = matcher.opcodes().iter().map(|op| op.tag).collect();

    assert_eq!(
        tags,
        vec![
            OpTag::Delete,  // q
            OpTag::Equal,   // ab
            OpTag::Replace, // x -> y
            OpTag::Equal,   // cd
            OpTag::Insert,  // f
        ]
    );
}

#[test]
fn test_adjacent_blocks_are_merged() {
    // Every block in the output must be maximal: no two adjacent entries
    let a = chars("abcabc");
    let b = chars("abcabc");
    let matcher = SequenceMatcher::new(&a, &b);
    let blocks = matcher.matching_blocks();
    assert_eq!(blocks.len(), 2); // one merged block plus the sentinel
    assert_eq!(blocks[0].size, 6);
}

#[test]
fn test_line_elements() {
    // The matcher is generic: works over lines as well as chars
    let a = vec!["alpha", "beta", "gamma"];
    let b = vec!["alpha", "delta", "gamma"];
    let matcher = SequenceMatcher::new(&a, &b);
    let tags: Vec<OpTag> = matcher.opcodes().iter().map(|op| op.tag).collect();
    assert_eq!(tags, vec![OpTag::Equal, OpTag::Replace, OpTag::Equal]);
}
