//! Named-Entity Value Objects
//!
//! The entity map is produced by an external entity extractor and consumed
//! read-only by the analysis pipeline, which embeds a textual rendering of
//! it into generation prompts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value Object: Named Entities by Category
///
/// Ordered mapping from an entity-category label (e.g. `MONEY`, `ORG`,
/// `PERSON`) to the entity text occurrences found under that label.
/// Backed by a `BTreeMap` so iteration and prompt rendering are
/// deterministic.
///
/// ## Example
///
/// ```rust
/// use cdv_domain::value_objects::EntityMap;
///
/// let mut entities = EntityMap::new();
/// entities.insert("MONEY", "$50,000");
/// entities.insert("MONEY", "$60,000");
/// entities.insert("ORG", "ACME Corp");
///
/// assert_eq!(entities.render(), "MONEY: $50,000, $60,000\nORG: ACME Corp");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap(BTreeMap<String, Vec<String>>);

impl EntityMap {
    /// Create an empty entity map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entity occurrence under a category label, preserving the
    /// order occurrences were recorded in
    pub fn insert<L: Into<String>, O: Into<String>>(&mut self, label: L, occurrence: O) {
        self.0.entry(label.into()).or_default().push(occurrence.into());
    }

    /// Number of category labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no entities were recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occurrences recorded under a label
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.0.get(label).map(Vec::as_slice)
    }

    /// Iterate labels and their occurrences in label order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Textual rendering in natural mapping form, one `LABEL: a, b, c`
    /// line per category, for embedding into generation prompts
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(|(label, occurrences)| format!("{}: {}", label, occurrences.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for EntityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<(String, Vec<String>)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
