//! Search invariants that must hold for any pool, index and query.

use super::common::as_set;
use super::{corpus_strategy, query_strategy, word_strategy};
use emosearch::{normalize, search, split_terms, CuratedBonuses, RankedSearchEngine};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same arguments, same output.
    #[test]
    fn prop_idempotent((pool, index) in corpus_strategy(), query in query_strategy()) {
        prop_assert_eq!(search(&query, &pool, &index), search(&query, &pool, &index));
    }

    /// Results are a duplicate-free subset of the pool.
    #[test]
    fn prop_results_subset_of_pool((pool, index) in corpus_strategy(), query in query_strategy()) {
        let results = search(&query, &pool, &index);
        let pool_set = as_set(&pool);
        let mut seen = HashSet::new();
        for candidate in &results {
            prop_assert!(pool_set.contains(candidate));
            prop_assert!(seen.insert(candidate.clone()), "duplicate {}", candidate);
        }
    }

    /// Multi-term membership is the intersection of single-term memberships.
    #[test]
    fn prop_and_is_intersection(
        (pool, index) in corpus_strategy(),
        a in word_strategy(),
        b in word_strategy(),
    ) {
        let both = as_set(&search(&format!("{} {}", a, b), &pool, &index));
        let only_a = as_set(&search(&a, &pool, &index));
        let only_b = as_set(&search(&b, &pool, &index));
        let expected: HashSet<_> = only_a.intersection(&only_b).cloned().collect();
        prop_assert_eq!(both, expected);
    }

    /// A candidate qualifies iff every term is contained in some keyword.
    #[test]
    fn prop_membership_matches_containment(
        (pool, index) in corpus_strategy(),
        query in query_strategy(),
    ) {
        let results = as_set(&search(&query, &pool, &index));
        let normalized = normalize(&query);
        let terms = split_terms(&normalized);
        for candidate in &pool {
            let keywords = index.keywords(candidate);
            let qualifies = terms
                .iter()
                .all(|term| keywords.iter().any(|k| k.contains(term)));
            prop_assert_eq!(results.contains(candidate), qualifies, "candidate {}", candidate);
        }
    }

    /// Blank queries are the identity.
    #[test]
    fn prop_blank_query_returns_pool((pool, index) in corpus_strategy(), blank in "[ \t]{0,4}") {
        prop_assert_eq!(search(&blank, &pool, &index), pool);
    }

    /// Scores never increase down the list.
    #[test]
    fn prop_scores_descending((pool, index) in corpus_strategy(), query in query_strategy()) {
        let scored = RankedSearchEngine::new().search_scored(&query, &pool, &index);
        for pair in scored.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Curation reorders but never changes membership.
    #[test]
    fn prop_curation_preserves_membership(
        (pool, index) in corpus_strategy(),
        query in query_strategy(),
        bonuses in prop::collection::vec((0usize..12, -1_000i64..1_000_000), 0..6),
    ) {
        let mut curated = CuratedBonuses::new();
        for (i, bonus) in bonuses {
            curated.insert(&query, format!("c{}", i), bonus);
        }
        let engine = RankedSearchEngine::new().with_policy(curated);
        prop_assert_eq!(
            as_set(&engine.search(&query, &pool, &index)),
            as_set(&search(&query, &pool, &index))
        );
    }

    /// A pinned qualifying candidate is always first.
    #[test]
    fn prop_pin_dominates((pool, index) in corpus_strategy(), query in query_strategy()) {
        let organic = search(&query, &pool, &index);
        if let Some(last) = organic.last() {
            let mut pins = CuratedBonuses::new();
            pins.insert(&query, last.clone(), 10_000_000);
            let engine = RankedSearchEngine::new().with_policy(pins);
            let results = engine.search(&query, &pool, &index);
            prop_assert_eq!(&results[0], last);
        }
    }
}
