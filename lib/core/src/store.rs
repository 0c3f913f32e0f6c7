//! Host store collaborators
//!
//! The engine never owns the corpus: it reads items through
//! [`ItemStore`] and hands finalized relation sets to a
//! [`RelationWriter`]. [`MemoryStore`] is an in-memory implementation
//! of both, used by the CLI host and the test suite.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::item::Item;

/// Typed reference to an item in a named collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub type_name: String,
    pub id: String,
}

impl Reference {
    #[inline]
    #[must_use]
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }
}

/// Read access to the host's collections.
pub trait ItemStore {
    /// All items of a collection, or `None` when the collection does
    /// not exist.
    fn items(&self, type_name: &str) -> Option<Vec<Item>>;
}

/// Write access for finalized relation sets.
///
/// Each write fully replaces the destination field's prior value -
/// no merge with a previous pass. Target order is preserved (scored
/// entries first, fillers last) so consumers can render most relevant
/// first. Takes `&self` so distinct items may be written concurrently.
pub trait RelationWriter {
    fn replace_relations(&self, source: &Reference, field_name: &str, targets: Vec<Reference>);
}

type RelationKey = (String, String, String); // (type_name, item_id, field_name)

/// In-memory store keyed by collection name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Item>>>,
    relations: RwLock<HashMap<RelationKey, Vec<Reference>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a whole collection.
    pub fn insert_collection(&self, type_name: impl Into<String>, items: Vec<Item>) {
        self.collections.write().insert(type_name.into(), items);
    }

    pub fn collection_names(&self) -> Vec<String> {
        self.collections.read().keys().cloned().collect()
    }

    /// Relations written for one item field, in write order.
    pub fn relations(&self, type_name: &str, item_id: &str, field_name: &str) -> Vec<Reference> {
        self.relations
            .read()
            .get(&(
                type_name.to_string(),
                item_id.to_string(),
                field_name.to_string(),
            ))
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of relation sets written.
    pub fn written_count(&self) -> usize {
        self.relations.read().len()
    }
}

impl ItemStore for MemoryStore {
    fn items(&self, type_name: &str) -> Option<Vec<Item>> {
        self.collections.read().get(type_name).cloned()
    }
}

impl RelationWriter for MemoryStore {
    fn replace_relations(&self, source: &Reference, field_name: &str, targets: Vec<Reference>) {
        self.relations.write().insert(
            (
                source.type_name.clone(),
                source.id.clone(),
                field_name.to_string(),
            ),
            targets,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_lookup() {
        let store = MemoryStore::new();
        store.insert_collection("Post", vec![Item::new("p1")]);

        assert_eq!(store.items("Post").unwrap().len(), 1);
        assert!(store.items("Missing").is_none());
    }

    #[test]
    fn test_write_replaces_prior_relations() {
        let store = MemoryStore::new();
        let source = Reference::new("Post", "p1");

        store.replace_relations(&source, "related", vec![Reference::new("Post", "p2")]);
        store.replace_relations(&source, "related", vec![Reference::new("Post", "p3")]);

        let written = store.relations("Post", "p1", "related");
        assert_eq!(written, vec![Reference::new("Post", "p3")]);
    }

    #[test]
    fn test_write_preserves_order() {
        let store = MemoryStore::new();
        let source = Reference::new("Post", "p1");
        let targets = vec![
            Reference::new("Post", "p4"),
            Reference::new("Post", "p2"),
            Reference::new("Post", "p3"),
        ];
        store.replace_relations(&source, "related", targets.clone());
        assert_eq!(store.relations("Post", "p1", "related"), targets);
    }
}
