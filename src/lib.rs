//! # relatix
//!
//! A content relation engine: assigns "related item" links across a
//! corpus of content items using TF-IDF similarity scores, under a
//! configurable quota policy with optional random backfill.
//!
//! One pass over a static corpus snapshot: validate the configuration,
//! convert items to documents, train the similarity index, then for
//! every item query, select, and write its relation set. A second
//! collection can be configured for bidirectional mode, where
//! relations always point at the opposite collection.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install relatix
//! relatix --config relatix.json --corpus corpus.json --output related.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use relatix::prelude::*;
//!
//! let store = MemoryStore::new();
//! store.insert_collection("Post", vec![
//!     Item::new("p1").with_field("body", "cats and dogs"),
//!     Item::new("p2").with_field("body", "cats and dogs"),
//!     Item::new("p3").with_field("body", "cars"),
//! ]);
//!
//! let recommender = Recommender::new(Options::new("Post", "body")).unwrap();
//! let mut engine = TfIdfEngine::new();
//! let mut rng = rand::rng();
//! recommender.run(&store, &mut engine, &store, &mut rng).unwrap();
//!
//! let related = store.relations("Post", "p1", "related");
//! assert_eq!(related[0].id, "p2");
//! ```
//!
//! ## Crate Structure
//!
//! - [`relatix-core`](https://docs.rs/relatix-core) - configuration,
//!   corpus conversion, relation selection, orchestration
//! - [`relatix-engine`](https://docs.rs/relatix-engine) - the TF-IDF
//!   similarity index

// Re-export core types
pub use relatix_core::{
    build_corpus, select_relations, CollectionMode, Config, ConfigError, Document, Error, Item,
    ItemStore, MemoryStore, Options, Recommender, Reference, Relation, RelationWriter, Result,
    RunSummary, SimilarityEngine, SimilarityResult,
};

// Re-export the engine
pub use relatix_engine::TfIdfEngine;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CollectionMode, Config, ConfigError, Document, Error, Item, ItemStore, MemoryStore,
        Options, Recommender, Reference, Relation, RelationWriter, Result, RunSummary,
        SimilarityEngine, SimilarityResult, TfIdfEngine,
    };
}
