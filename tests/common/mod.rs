//! Shared test utilities and fixtures.

#![allow(dead_code)]

use emosearch::{Candidate, CuratedBonuses, KeywordIndex, RankedSearchEngine};
use std::collections::HashSet;

// Re-export canonical test utilities from emosearch::testing
pub use emosearch::testing::{make_index, make_pool, sample_index, sample_pool};

/// The "하트" pin table used throughout: ❤️ far above everything else.
pub fn heart_pins() -> CuratedBonuses {
    let mut pins = CuratedBonuses::new();
    pins.insert("하트", "❤️", 10_000_000);
    pins.insert("하트", "💕", 800_000);
    pins
}

/// An engine with [`heart_pins`].
pub fn pinned_engine() -> RankedSearchEngine {
    RankedSearchEngine::new().with_policy(heart_pins())
}

/// Results as a set, for membership comparisons.
pub fn as_set(results: &[Candidate]) -> HashSet<Candidate> {
    results.iter().cloned().collect()
}

/// Position of `candidate` in `results`; panics if absent.
pub fn rank_of(results: &[Candidate], candidate: &str) -> usize {
    results
        .iter()
        .position(|c| c == candidate)
        .unwrap_or_else(|| panic!("{} not in results {:?}", candidate, results))
}

/// Score of `candidate` for `query` with no curation; None if it doesn't qualify.
pub fn organic_score(query: &str, candidate: &str, index: &KeywordIndex) -> Option<i64> {
    RankedSearchEngine::new()
        .search_scored(query, &[candidate.to_string()], index)
        .first()
        .map(|s| s.score)
}
