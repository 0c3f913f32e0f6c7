//! # relatix Engine
//!
//! TF-IDF similarity engine for relatix.
//!
//! Implements the [`SimilarityEngine`](relatix_core::SimilarityEngine)
//! contract with an in-memory tf-idf index: one blocking training pass
//! over the corpus, then read-only cosine queries. Supports the
//! bidirectional two-corpus mode where a query from one side returns
//! results from the other side only.
//!
//! ## Example
//!
//! ```rust
//! use relatix_core::{Document, SimilarityEngine};
//! use relatix_engine::TfIdfEngine;
//!
//! let mut engine = TfIdfEngine::new();
//! engine.train(vec![
//!     Document::new("1", "cats and dogs"),
//!     Document::new("2", "cats and dogs"),
//!     Document::new("3", "cars"),
//! ]);
//!
//! let results = engine.query("1", 0.1, 3);
//! assert_eq!(results[0].id, "2");
//! ```

pub mod tfidf;
pub mod tokenize;

pub use tfidf::TfIdfEngine;
pub use tokenize::tokenize;
