use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Lightweight comparable document derived from one item and one
/// configured field. Rebuilt from scratch every pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub content: String,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Convert an item to a document using the configured training
    /// field. Content is lower-cased unless `case_sensitive` is set;
    /// a missing field yields an empty content string.
    pub fn from_item(item: &Item, field: &str, case_sensitive: bool) -> Self {
        let text = item.field_text(field);
        let content = if case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };
        if text.is_empty() {
            tracing::debug!(id = %item.id, field, "item has no content for training field");
        }
        Self {
            id: item.id.clone(),
            content,
        }
    }
}

/// Build the full document corpus for one collection.
pub fn build_corpus(items: &[Item], field: &str, case_sensitive: bool) -> Vec<Document> {
    items
        .iter()
        .map(|item| Document::from_item(item, field, case_sensitive))
        .collect()
}
