//! Unit tests for the document diff engine

use cdv_domain::diff::DiffEngine;
use cdv_domain::value_objects::DiffTag;

#[test]
fn test_identical_texts() {
    let text = "This is a test.\nSecond line.";
    let result = DiffEngine::compare(text, text);

    assert_eq!(result.similarity, 1.0);
    assert!(result.diff.iter().all(|line| line.tag == DiffTag::Equal));
    assert_eq!(result.alignment.left.len(), result.alignment.right.len());
    assert!(result
        .alignment
        .left
        .iter()
        .chain(&result.alignment.right)
        .all(|line| line.tag == DiffTag::Equal));
}

#[test]
fn test_completely_different_texts() {
    let result = DiffEngine::compare("Original text.", "Completely different.");

    assert!(result.similarity < 0.5);
    assert!(result.diff.iter().any(|line| line.tag == DiffTag::Deleted));
    assert!(result.diff.iter().any(|line| line.tag == DiffTag::Inserted));
    assert!(!result.diff.iter().any(|line| line.tag == DiffTag::Equal));
    assert!(result
        .alignment
        .left
        .iter()
        .any(|line| line.tag == DiffTag::Deleted));
    assert!(result
        .alignment
        .right
        .iter()
        .any(|line| line.tag == DiffTag::Inserted));
}

#[test]
fn test_modified_texts() {
    let source = "This is line one.\nOriginal line two.\nUnchanged line.";
    let target = "This is modified.\nNew line two.\nUnchanged line.";
    let result = DiffEngine::compare(source, target);

    assert!(result.similarity > 0.0 && result.similarity < 1.0);
    assert!(result.diff.iter().any(|line| line.tag == DiffTag::Equal));
    assert!(result.diff.iter().any(|line| line.tag == DiffTag::Deleted));
    assert!(result.diff.iter().any(|line| line.tag == DiffTag::Inserted));
}

#[test]
fn test_empty_texts() {
    let result = DiffEngine::compare("", "");

    assert_eq!(result.similarity, 1.0);
    assert!(result.diff.is_empty());
    assert!(result.alignment.is_empty());
}

#[test]
fn test_one_empty_text() {
    let result = DiffEngine::compare("Some content\nMultiple lines", "");

    assert_eq!(result.similarity, 0.0);
    assert!(result.diff.iter().all(|line| line.tag == DiffTag::Deleted));
    assert!(result
        .alignment
        .left
        .iter()
        .all(|line| line.tag == DiffTag::Deleted));
    assert!(result.alignment.right.is_empty());
}

#[test]
fn test_empty_source_nonempty_target() {
    let result = DiffEngine::compare("", "Some content");

    assert_eq!(result.similarity, 0.0);
    assert!(result.diff.iter().all(|line| line.tag == DiffTag::Inserted));
    assert!(result.alignment.left.is_empty());
}

#[test]
fn test_insert_only() {
    let source = "Base text\nUnchanged line";
    let target = "Base text\nNew inserted line\nUnchanged line";
    let result = DiffEngine::compare(source, target);

    // Right side gains exactly one inserted entry
    assert_eq!(
        result.alignment.right.len(),
        result.alignment.left.len() + 1
    );
    assert!(result
        .alignment
        .right
        .iter()
        .any(|line| line.tag == DiffTag::Inserted && line.text == "New inserted line"));

    // Unchanged parts remain paired on both sides
    assert!(result
        .alignment
        .left
        .iter()
        .any(|line| line.tag == DiffTag::Equal && line.text == "Base text"));
    assert!(result
        .alignment
        .right
        .iter()
        .any(|line| line.tag == DiffTag::Equal && line.text == "Base text"));

    assert!(result.similarity > 0.0 && result.similarity < 1.0);
    assert!(result
        .rendered_diff()
        .iter()
        .any(|line| line.starts_with("+ New inserted line")));
}

#[test]
fn test_replace_run_truncates_to_zipped_prefix() {
    // The replace run maps two source lines onto one target line; only the
    // zipped prefix appears in the alignment and the extra source line is
    // dropped from the view. The line diff still reports it as deleted.
    let source = "shared head\nold clause A\nold clause B\nshared tail";
    let target = "shared head\nnew clause\nshared tail";
    let result = DiffEngine::compare(source, target);

    assert_eq!(result.alignment.left.len(), 3);
    assert_eq!(result.alignment.right.len(), 3);
    assert!(!result
        .alignment
        .left
        .iter()
        .any(|line| line.text == "old clause B"));
    assert!(result
        .diff
        .iter()
        .any(|line| line.tag == DiffTag::Deleted && line.text == "old clause B"));
}

#[test]
fn test_difference_lines_exclude_equal() {
    let source = "same\nremoved";
    let target = "same\nadded";
    let result = DiffEngine::compare(source, target);

    let differences = result.difference_lines();
    assert_eq!(differences, vec!["- removed", "+ added"]);
}

#[test]
fn test_compare_is_deterministic() {
    let source = "alpha\nbeta\ngamma\nalpha\nbeta";
    let target = "beta\nalpha\ngamma\nbeta";
    let first = DiffEngine::compare(source, target);
    let second = DiffEngine::compare(source, target);
    assert_eq!(first, second);
}
