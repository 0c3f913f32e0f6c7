//! Relation selection
//!
//! Applies the quota policy to one item's ranked candidates and, when
//! enabled, backfills an under-filled relation set with distinct
//! random items drawn from the corpus.

use ahash::AHashSet;
use rand::Rng;

use crate::config::Config;
use crate::similarity::SimilarityResult;

/// One finalized relation for an item. `score` is `None` for fillers
/// added by random backfill.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub id: String,
    pub score: Option<f32>,
}

impl Relation {
    #[inline]
    #[must_use]
    pub fn scored(id: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            score: Some(score),
        }
    }

    #[inline]
    #[must_use]
    pub fn filler(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: None,
        }
    }

    #[inline]
    pub fn is_filler(&self) -> bool {
        self.score.is_none()
    }
}

/// Finalize the relation set for one item.
///
/// `candidates` come from `engine.query(item_id, min_score, max_relations)`
/// and stay in score order at the front of the result. When backfill is
/// active and the candidates fall short of `min_relations`, distinct
/// random ids are drawn from `corpus_ids`, never repeating the item
/// itself or an existing candidate. The draw is over the non-excluded
/// pool only, so the selector terminates even when the corpus is smaller
/// than the quota; in that case the set simply stays short.
pub fn select_relations<R: Rng + ?Sized>(
    item_id: &str,
    config: &Config,
    corpus_ids: &[String],
    candidates: Vec<SimilarityResult>,
    rng: &mut R,
) -> Vec<Relation> {
    let mut relations: Vec<Relation> = candidates
        .into_iter()
        .filter(|c| c.score <= config.max_score)
        .map(|c| Relation::scored(c.id, c.score))
        .collect();

    // min_relations may be configured above max_relations; the hard
    // cap wins so the set never exceeds max_relations.
    let target = config.min_relations.min(config.max_relations);
    if !config.fill_with_random || relations.len() >= target {
        return relations;
    }

    let needed = target - relations.len();
    let pool: Vec<&String> = {
        let mut excluded: AHashSet<&str> = AHashSet::with_capacity(relations.len() + 1);
        excluded.insert(item_id);
        for relation in &relations {
            excluded.insert(&relation.id);
        }
        corpus_ids
            .iter()
            .filter(|id| !excluded.contains(id.as_str()))
            .collect()
    };
    let take = needed.min(pool.len());
    if take < needed {
        tracing::debug!(
            item_id,
            needed,
            available = pool.len(),
            "corpus exhausted before reaching minRelations"
        );
    }

    for index in rand::seq::index::sample(rng, pool.len(), take) {
        relations.push(Relation::filler(pool[index].clone()));
    }

    relations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(min_relations: usize, fill_with_random: bool) -> Config {
        let mut options = Options::new("Post", "body");
        options.min_relations = min_relations;
        options.fill_with_random = fill_with_random;
        Config::from_options(options).unwrap()
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_backfill_when_disabled() {
        let config = config(3, false);
        let corpus = ids(&["a", "b", "c", "d"]);
        let candidates = vec![SimilarityResult::new("b", 0.9)];
        let mut rng = StdRng::seed_from_u64(7);

        let relations = select_relations("a", &config, &corpus, candidates, &mut rng);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0], Relation::scored("b", 0.9));
    }

    #[test]
    fn test_no_backfill_when_quota_met() {
        let config = config(1, true);
        let corpus = ids(&["a", "b", "c"]);
        let candidates = vec![SimilarityResult::new("b", 0.9)];
        let mut rng = StdRng::seed_from_u64(7);

        let relations = select_relations("a", &config, &corpus, candidates, &mut rng);
        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn test_backfill_reaches_quota_with_distinct_fillers() {
        let config = config(3, true);
        let corpus = ids(&["a", "b", "c", "d", "e"]);
        let candidates = vec![SimilarityResult::new("b", 0.9)];
        let mut rng = StdRng::seed_from_u64(42);

        let relations = select_relations("a", &config, &corpus, candidates, &mut rng);
        assert_eq!(relations.len(), 3);
        // Scored prefix stays first.
        assert_eq!(relations[0], Relation::scored("b", 0.9));
        assert!(relations[1].is_filler());
        assert!(relations[2].is_filler());

        let mut seen: Vec<&str> = relations.iter().map(|r| r.id.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 3, "filler ids must be distinct");
        assert!(relations.iter().all(|r| r.id != "a"), "never relates to itself");
    }

    #[test]
    fn test_backfill_terminates_on_exhausted_corpus() {
        // minRelations=5 over a 3-item corpus: at most 2 relations, no hang.
        let config = config(5, true);
        let corpus = ids(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(1);

        let relations = select_relations("a", &config, &corpus, Vec::new(), &mut rng);
        assert_eq!(relations.len(), 2);
        assert!(relations.iter().all(|r| r.is_filler()));
        assert!(relations.iter().all(|r| r.id != "a"));
    }

    #[test]
    fn test_backfill_capped_by_max_relations() {
        let mut options = Options::new("Post", "body");
        options.min_relations = 10;
        options.max_relations = 2;
        options.fill_with_random = true;
        let config = Config::from_options(options).unwrap();
        let corpus = ids(&["a", "b", "c", "d", "e", "f"]);
        let mut rng = StdRng::seed_from_u64(3);

        let relations = select_relations("a", &config, &corpus, Vec::new(), &mut rng);
        assert_eq!(relations.len(), 2);
    }

    #[test]
    fn test_max_score_filters_candidates() {
        let mut options = Options::new("Post", "body");
        options.max_score = 0.8;
        let config = Config::from_options(options).unwrap();
        let corpus = ids(&["a", "b", "c"]);
        let candidates = vec![
            SimilarityResult::new("b", 0.95),
            SimilarityResult::new("c", 0.5),
        ];
        let mut rng = StdRng::seed_from_u64(9);

        let relations = select_relations("a", &config, &corpus, candidates, &mut rng);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].id, "c");
    }
}
