//! Similarity engine contract
//!
//! The engine is an external collaborator: it is trained once per
//! pass on the document corpus and then answers nearest-neighbor
//! queries. Training must complete before the first query; after
//! training the index is read-only.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// One ranked neighbor, score in [0,1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    pub id: String,
    pub score: f32,
}

impl SimilarityResult {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, score: f32) -> Self {
        Self { id: id.into(), score }
    }
}

/// Trained similarity index over one or two document corpora.
pub trait SimilarityEngine {
    /// Build a single-corpus index. A second call fully replaces the
    /// prior index.
    fn train(&mut self, documents: Vec<Document>);

    /// Build a cross-corpus index: queries for a primary id return
    /// reference-side results and vice versa.
    fn train_bidirectional(&mut self, primary: Vec<Document>, reference: Vec<Document>);

    /// Ranked neighbors of `id`, sorted descending by score, at most
    /// `max_results` long, every score >= `min_score`, never
    /// containing `id` itself. An unknown id or an id with no
    /// comparable neighbors yields an empty sequence.
    fn query(&self, id: &str, min_score: f32, max_results: usize) -> Vec<SimilarityResult>;
}
