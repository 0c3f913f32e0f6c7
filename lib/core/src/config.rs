//! Relation policy configuration
//!
//! The raw [`Options`] struct mirrors the host configuration file
//! (camelCase keys, defaults applied for anything absent). It is
//! validated once into an immutable [`Config`] before any training
//! happens; an invalid option set fails fast with [`ConfigError`]
//! and leaves no partial engine state behind.

use serde::{Deserialize, Serialize};

/// Raw option set as supplied by the host.
///
/// `type_name` and `field` are required; `reference_type_name` and
/// `reference_field` must be set together or not at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Master switch - when false the pass is a no-op but construction succeeds
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Name of the collection to relate
    pub type_name: String,

    /// Optional second collection for bidirectional mode
    #[serde(default)]
    pub reference_type_name: Option<String>,

    /// Item field the similarity model is trained on
    pub field: String,

    /// Training field for the reference collection (required iff
    /// `reference_type_name` is set)
    #[serde(default)]
    pub reference_field: Option<String>,

    /// Destination field for relations on the primary collection
    #[serde(default = "default_related_field")]
    pub related_field_name: String,

    /// Destination field for relations on the reference collection
    #[serde(default = "default_related_field")]
    pub reference_related_field_name: String,

    /// Minimum similarity score for a candidate to count as related
    #[serde(default = "default_min_score")]
    pub min_score: f32,

    /// Upper score bound - candidates above it are dropped
    #[serde(default = "default_max_score")]
    pub max_score: f32,

    /// Maximum number of relations produced per item
    #[serde(default = "default_max_relations")]
    pub max_relations: usize,

    /// Minimum number of relations per item, reached by random
    /// backfill when `fill_with_random` is set
    #[serde(default = "default_min_relations")]
    pub min_relations: usize,

    /// Backfill under-filled relation sets with distinct random items
    #[serde(default)]
    pub fill_with_random: bool,

    /// Keep letter case when comparing content (default lower-cases)
    #[serde(default)]
    pub case_sensitive: bool,

    /// Verbose per-item logging
    #[serde(default)]
    pub debug: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_related_field() -> String {
    "related".to_string()
}

fn default_min_score() -> f32 {
    0.01
}

fn default_max_score() -> f32 {
    1.0
}

fn default_max_relations() -> usize {
    10
}

fn default_min_relations() -> usize {
    3
}

impl Options {
    /// Minimal option set: one collection, one training field,
    /// everything else at its default.
    pub fn new(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            enabled: true,
            type_name: type_name.into(),
            reference_type_name: None,
            field: field.into(),
            reference_field: None,
            related_field_name: default_related_field(),
            reference_related_field_name: default_related_field(),
            min_score: default_min_score(),
            max_score: default_max_score(),
            max_relations: default_max_relations(),
            min_relations: default_min_relations(),
            fill_with_random: false,
            case_sensitive: false,
            debug: false,
        }
    }

    /// Enable bidirectional mode against a second collection.
    #[must_use]
    pub fn with_reference(
        mut self,
        reference_type_name: impl Into<String>,
        reference_field: impl Into<String>,
    ) -> Self {
        self.reference_type_name = Some(reference_type_name.into());
        self.reference_field = Some(reference_field.into());
        self
    }
}

/// Which collections the pass operates on.
///
/// Validation collapses the two optional reference fields into one of
/// these variants, so a half-configured dual setup cannot exist past
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionMode {
    /// One collection related to itself
    Single { type_name: String, field: String },
    /// Two collections related to each other
    Dual {
        type_name: String,
        field: String,
        reference_type_name: String,
        reference_field: String,
    },
}

impl CollectionMode {
    pub fn is_dual(&self) -> bool {
        matches!(self, CollectionMode::Dual { .. })
    }
}

/// Validated, immutable policy configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub enabled: bool,
    pub mode: CollectionMode,
    pub related_field_name: String,
    pub reference_related_field_name: String,
    pub min_score: f32,
    pub max_score: f32,
    pub max_relations: usize,
    pub min_relations: usize,
    pub fill_with_random: bool,
    pub case_sensitive: bool,
    pub debug: bool,
}

impl Config {
    /// Validate a raw option set.
    ///
    /// Checks required fields, the reference pairing rule, and the
    /// numeric bounds (`min_score`/`max_score` in [0,1],
    /// `max_relations`/`min_relations` in [0,100]).
    pub fn from_options(options: Options) -> Result<Self, ConfigError> {
        if options.type_name.is_empty() {
            return Err(ConfigError::MissingField("typeName"));
        }
        if options.field.is_empty() {
            return Err(ConfigError::MissingField("field"));
        }

        let mode = match (options.reference_type_name, options.reference_field) {
            (None, None) => CollectionMode::Single {
                type_name: options.type_name,
                field: options.field,
            },
            (Some(reference_type_name), Some(reference_field)) => CollectionMode::Dual {
                type_name: options.type_name,
                field: options.field,
                reference_type_name,
                reference_field,
            },
            (Some(_), None) => return Err(ConfigError::MissingReferenceField),
            (None, Some(_)) => return Err(ConfigError::MissingReferenceTypeName),
        };

        for (name, value) in [("minScore", options.min_score), ("maxScore", options.max_score)] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::ScoreOutOfRange { name, value });
            }
        }
        for (name, value) in [
            ("maxRelations", options.max_relations),
            ("minRelations", options.min_relations),
        ] {
            if value > 100 {
                return Err(ConfigError::RelationBoundOutOfRange { name, value });
            }
        }

        Ok(Self {
            enabled: options.enabled,
            mode,
            related_field_name: options.related_field_name,
            reference_related_field_name: options.reference_related_field_name,
            min_score: options.min_score,
            max_score: options.max_score,
            max_relations: options.max_relations,
            min_relations: options.min_relations,
            fill_with_random: options.fill_with_random,
            case_sensitive: options.case_sensitive,
            debug: options.debug,
        })
    }

    /// Primary collection name.
    pub fn type_name(&self) -> &str {
        match &self.mode {
            CollectionMode::Single { type_name, .. } => type_name,
            CollectionMode::Dual { type_name, .. } => type_name,
        }
    }

    /// Training field of the primary collection.
    pub fn field(&self) -> &str {
        match &self.mode {
            CollectionMode::Single { field, .. } => field,
            CollectionMode::Dual { field, .. } => field,
        }
    }
}

/// Errors raised while validating an option set
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("required option '{0}' is missing or empty")]
    MissingField(&'static str),

    #[error("referenceField is required when referenceTypeName is set")]
    MissingReferenceField,

    #[error("referenceTypeName is required when referenceField is set")]
    MissingReferenceTypeName,

    #[error("option '{name}' must be in range [0,1], got {value}")]
    ScoreOutOfRange { name: &'static str, value: f32 },

    #[error("option '{name}' must be in range [0,100], got {value}")]
    RelationBoundOutOfRange { name: &'static str, value: usize },
}
