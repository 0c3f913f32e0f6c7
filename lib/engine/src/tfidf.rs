//! TF-IDF similarity index
//!
//! Trains on a document corpus and answers nearest-neighbor queries
//! with cosine similarity over unit-normalized tf-idf vectors. In
//! bidirectional mode every document is tagged with its side and a
//! query only ever returns documents from the opposite side.

use ahash::AHashMap;
use std::collections::HashMap;

use relatix_core::{Document, SimilarityEngine, SimilarityResult};

use crate::tokenize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Primary,
    Reference,
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    id: String,
    side: Side,
    /// term -> unit-normalized tf-idf weight
    weights: HashMap<String, f32>,
}

/// In-memory TF-IDF engine. Retraining fully replaces the index.
#[derive(Debug, Default)]
pub struct TfIdfEngine {
    documents: Vec<IndexedDocument>,
    by_id: AHashMap<String, usize>,
    bidirectional: bool,
}

impl TfIdfEngine {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed documents.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn rebuild(&mut self, sides: Vec<(Vec<Document>, Side)>) {
        self.documents.clear();
        self.by_id.clear();

        // First pass: per-document term frequencies plus document
        // frequencies over the whole (possibly two-sided) corpus.
        let mut term_freqs: Vec<(String, Side, HashMap<String, u32>)> = Vec::new();
        let mut dfs: HashMap<String, u32> = HashMap::new();
        for (documents, side) in sides {
            for document in documents {
                let mut freqs: HashMap<String, u32> = HashMap::new();
                for token in tokenize(&document.content) {
                    *freqs.entry(token).or_insert(0) += 1;
                }
                for term in freqs.keys() {
                    *dfs.entry(term.clone()).or_insert(0) += 1;
                }
                term_freqs.push((document.id, side, freqs));
            }
        }

        // Second pass: smoothed idf, then unit-normalize each vector
        // so cosine reduces to a sparse dot product.
        let total = term_freqs.len() as f32;
        for (id, side, freqs) in term_freqs {
            let mut weights: HashMap<String, f32> = freqs
                .into_iter()
                .map(|(term, tf)| {
                    let df = dfs[&term] as f32;
                    let idf = (1.0 + total / df).ln();
                    (term, tf as f32 * idf)
                })
                .collect();

            let norm = weights.values().map(|w| w * w).sum::<f32>().sqrt();
            if norm > 0.0 {
                for weight in weights.values_mut() {
                    *weight /= norm;
                }
            }

            let index = self.documents.len();
            self.by_id.entry(id.clone()).or_insert(index);
            self.documents.push(IndexedDocument { id, side, weights });
        }
    }
}

impl SimilarityEngine for TfIdfEngine {
    fn train(&mut self, documents: Vec<Document>) {
        self.bidirectional = false;
        self.rebuild(vec![(documents, Side::Primary)]);
    }

    fn train_bidirectional(&mut self, primary: Vec<Document>, reference: Vec<Document>) {
        self.bidirectional = true;
        self.rebuild(vec![(primary, Side::Primary), (reference, Side::Reference)]);
    }

    fn query(&self, id: &str, min_score: f32, max_results: usize) -> Vec<SimilarityResult> {
        let Some(&index) = self.by_id.get(id) else {
            return Vec::new();
        };
        let query_document = &self.documents[index];

        let mut results: Vec<SimilarityResult> = Vec::new();
        for (i, document) in self.documents.iter().enumerate() {
            if i == index {
                continue;
            }
            if self.bidirectional && document.side == query_document.side {
                continue;
            }
            let score = dot(&query_document.weights, &document.weights).clamp(0.0, 1.0);
            if score >= min_score {
                results.push(SimilarityResult::new(document.id.clone(), score));
            }
        }

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(max_results);
        results
    }
}

/// Sparse dot product; both sides are unit vectors.
fn dot(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum()
}
