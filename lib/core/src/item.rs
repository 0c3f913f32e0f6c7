use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A content item as seen by the engine: a unique id plus a flat
/// mapping of field name to text value. Owned by the host store and
/// read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Text of a named field, or `""` when the item does not carry it.
    ///
    /// A missing content field is a soft condition: the item still
    /// participates in the pass, just with no textual signal.
    #[inline]
    pub fn field_text(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }
}
