//! Unit tests for domain value objects

use cdv_domain::value_objects::{DiffLine, DiffTag, EntityMap};

#[test]
fn test_diff_tag_markers() {
    assert_eq!(DiffTag::Equal.marker(), "  ");
    assert_eq!(DiffTag::Deleted.marker(), "- ");
    assert_eq!(DiffTag::Inserted.marker(), "+ ");
}

#[test]
fn test_diff_line_display_uses_marker() {
    assert_eq!(DiffLine::equal("same").to_string(), "  same");
    assert_eq!(DiffLine::deleted("gone").to_string(), "- gone");
    assert_eq!(DiffLine::inserted("new").to_string(), "+ new");
}

#[test]
fn test_diff_tag_serde_lowercase() {
    let json = serde_json::to_string(&DiffTag::Inserted).unwrap();
    assert_eq!(json, "\"inserted\"");
    let tag: DiffTag = serde_json::from_str("\"deleted\"").unwrap();
    assert_eq!(tag, DiffTag::Deleted);
}

#[test]
fn test_entity_map_preserves_occurrence_order() {
    let mut entities = EntityMap::new();
    entities.insert("MONEY", "$50,000");
    entities.insert("MONEY", "$60,000");

    assert_eq!(
        entities.get("MONEY"),
        Some(&["$50,000".to_string(), "$60,000".to_string()][..])
    );
}

#[test]
fn test_entity_map_render_is_deterministic() {
    let mut entities = EntityMap::new();
    entities.insert("PERSON", "John Doe");
    entities.insert("MONEY", "$50,000");
    entities.insert("ORG", "ACME Corp");

    // Labels render in label order regardless of insertion order
    assert_eq!(
        entities.render(),
        "MONEY: $50,000\nORG: ACME Corp\nPERSON: John Doe"
    );
}

#[test]
fn test_entity_map_empty_render() {
    assert_eq!(EntityMap::new().render(), "");
    assert!(EntityMap::new().is_empty());
}

#[test]
fn test_entity_map_serde_round_trip() {
    let mut entities = EntityMap::new();
    entities.insert("ORG", "ACME Corp");

    let json = serde_json::to_string(&entities).unwrap();
    assert_eq!(json, r#"{"ORG":["ACME Corp"]}"#);

    let parsed: EntityMap = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entities);
}
