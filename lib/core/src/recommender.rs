//! Pass orchestration
//!
//! [`Recommender`] owns the validated configuration and drives the
//! single pass: resolve collections, build the document corpora, train
//! the similarity engine, then query/select/write per item. In dual
//! mode both collections are processed, each against the opposite
//! side's index.

use rand::Rng;

use crate::config::{CollectionMode, Config, Options};
use crate::document::build_corpus;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::selector::select_relations;
use crate::similarity::SimilarityEngine;
use crate::store::{ItemStore, Reference, RelationWriter};

/// Counters for one completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub items_processed: usize,
    pub relations_written: usize,
    pub fillers_added: usize,
}

/// The relation assignment engine, configured once and run once per
/// host invocation.
#[derive(Debug, Clone)]
pub struct Recommender {
    config: Config,
}

impl Recommender {
    /// Validate the raw options and construct the engine. Fails with
    /// a configuration error before any corpus access.
    pub fn new(options: Options) -> Result<Self> {
        Ok(Self {
            config: Config::from_options(options)?,
        })
    }

    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pass. The engine value is owned by the caller and
    /// trained here before any query is issued; `rng` feeds the random
    /// backfill only.
    pub fn run<E, S, W, R>(
        &self,
        store: &S,
        engine: &mut E,
        writer: &W,
        rng: &mut R,
    ) -> Result<RunSummary>
    where
        E: SimilarityEngine,
        S: ItemStore + ?Sized,
        W: RelationWriter + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.config.enabled {
            tracing::info!("relation pass disabled, skipping");
            return Ok(RunSummary::default());
        }

        let mut summary = RunSummary::default();
        match &self.config.mode {
            CollectionMode::Single { type_name, field } => {
                let items = self.resolve(store, type_name)?;
                let corpus = build_corpus(&items, field, self.config.case_sensitive);
                tracing::debug!(collection = %type_name, documents = corpus.len(), "training");
                engine.train(corpus);

                let corpus_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
                self.relate(
                    &items,
                    type_name,
                    &self.config.related_field_name,
                    type_name,
                    &corpus_ids,
                    engine,
                    writer,
                    rng,
                    &mut summary,
                );
            }
            CollectionMode::Dual {
                type_name,
                field,
                reference_type_name,
                reference_field,
            } => {
                let primary = self.resolve(store, type_name)?;
                let reference = self.resolve(store, reference_type_name)?;
                let primary_corpus = build_corpus(&primary, field, self.config.case_sensitive);
                let reference_corpus =
                    build_corpus(&reference, reference_field, self.config.case_sensitive);
                tracing::debug!(
                    primary = primary_corpus.len(),
                    reference = reference_corpus.len(),
                    "training bidirectional"
                );
                engine.train_bidirectional(primary_corpus, reference_corpus);

                let primary_ids: Vec<String> = primary.iter().map(|i| i.id.clone()).collect();
                let reference_ids: Vec<String> = reference.iter().map(|i| i.id.clone()).collect();

                // Relations always cross collections, fillers included:
                // primary items draw from the reference corpus and vice
                // versa.
                self.relate(
                    &primary,
                    type_name,
                    &self.config.related_field_name,
                    reference_type_name,
                    &reference_ids,
                    engine,
                    writer,
                    rng,
                    &mut summary,
                );
                self.relate(
                    &reference,
                    reference_type_name,
                    &self.config.reference_related_field_name,
                    type_name,
                    &primary_ids,
                    engine,
                    writer,
                    rng,
                    &mut summary,
                );
            }
        }

        tracing::info!(
            items = summary.items_processed,
            relations = summary.relations_written,
            fillers = summary.fillers_added,
            "finished"
        );
        Ok(summary)
    }

    fn resolve<S: ItemStore + ?Sized>(&self, store: &S, type_name: &str) -> Result<Vec<Item>> {
        store
            .items(type_name)
            .ok_or_else(|| Error::CollectionNotFound(type_name.to_string()))
    }

    #[allow(clippy::too_many_arguments)]
    fn relate<E, W, R>(
        &self,
        items: &[Item],
        source_type: &str,
        field_name: &str,
        target_type: &str,
        corpus_ids: &[String],
        engine: &E,
        writer: &W,
        rng: &mut R,
        summary: &mut RunSummary,
    ) where
        E: SimilarityEngine,
        W: RelationWriter + ?Sized,
        R: Rng + ?Sized,
    {
        for item in items {
            let candidates =
                engine.query(&item.id, self.config.min_score, self.config.max_relations);
            let relations =
                select_relations(&item.id, &self.config, corpus_ids, candidates, rng);

            summary.items_processed += 1;
            summary.relations_written += relations.len();
            summary.fillers_added += relations.iter().filter(|r| r.is_filler()).count();
            if self.config.debug {
                tracing::debug!(
                    item = %item.id,
                    relations = relations.len(),
                    "relations selected"
                );
            }

            let targets: Vec<Reference> = relations
                .into_iter()
                .map(|relation| Reference::new(target_type, relation.id))
                .collect();
            writer.replace_relations(&Reference::new(source_type, &item.id), field_name, targets);
        }
    }
}
