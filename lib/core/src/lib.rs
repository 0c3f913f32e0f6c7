//! # relatix Core
//!
//! Core library for the relatix content relation engine.
//!
//! This crate provides the policy and orchestration layer:
//!
//! - [`Options`] / [`Config`] - policy knobs, validated once at startup
//! - [`Item`] / [`Document`] - host items and their comparable form
//! - [`SimilarityEngine`] - contract for the trained similarity index
//! - [`select_relations`] - quota enforcement and random backfill
//! - [`Recommender`] - the single-pass orchestrator, single or dual
//!   collection
//!
//! ## Example
//!
//! ```rust
//! use relatix_core::{Item, MemoryStore, Options, Recommender, SimilarityEngine};
//! # use relatix_core::{Document, SimilarityResult};
//! # struct NullEngine;
//! # impl SimilarityEngine for NullEngine {
//! #     fn train(&mut self, _: Vec<Document>) {}
//! #     fn train_bidirectional(&mut self, _: Vec<Document>, _: Vec<Document>) {}
//! #     fn query(&self, _: &str, _: f32, _: usize) -> Vec<SimilarityResult> { Vec::new() }
//! # }
//!
//! let store = MemoryStore::new();
//! store.insert_collection("Post", vec![
//!     Item::new("p1").with_field("body", "cats and dogs"),
//!     Item::new("p2").with_field("body", "cats and dogs"),
//! ]);
//!
//! let recommender = Recommender::new(Options::new("Post", "body")).unwrap();
//! let mut engine = NullEngine;
//! let mut rng = rand::rng();
//! let summary = recommender.run(&store, &mut engine, &store, &mut rng).unwrap();
//! assert_eq!(summary.items_processed, 2);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod item;
pub mod recommender;
pub mod selector;
pub mod similarity;
pub mod store;

pub use config::{CollectionMode, Config, ConfigError, Options};
pub use document::{build_corpus, Document};
pub use error::{Error, Result};
pub use item::Item;
pub use recommender::{Recommender, RunSummary};
pub use selector::{select_relations, Relation};
pub use similarity::{SimilarityEngine, SimilarityResult};
pub use store::{ItemStore, MemoryStore, Reference, RelationWriter};
