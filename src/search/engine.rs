// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranked search engine.
//!
//! One pass over the pool. For each candidate, every query term is scored
//! against the candidate's keyword list; a candidate that misses any term is
//! dropped. Survivors get the candidate-level bonuses, then whatever the
//! curation policies add, and are sorted by [`compare_results`].
//!
//! The engine holds no per-search state. It can be shared freely and called
//! from any number of places at once; the pool and index are borrowed
//! read-only for the duration of a call.

use super::accumulator::CandidateAccumulator;
use crate::curation::CurationPolicy;
use crate::scoring::ranking::compare_results;
use crate::scoring::score_term;
use crate::types::{Candidate, KeywordIndex, ScoredCandidate, TierSet};
use crate::utils::{normalize, split_terms};
use std::collections::HashSet;
use tracing::trace;

/// Weighted multi-term search over a candidate pool.
///
/// Without policies this is pure keyword scoring. Policies are consulted in
/// insertion order and their bonuses summed.
#[derive(Debug, Default)]
pub struct RankedSearchEngine {
    policies: Vec<Box<dyn CurationPolicy>>,
}

impl RankedSearchEngine {
    /// An engine with no curation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add a curation policy.
    pub fn with_policy(mut self, policy: impl CurationPolicy + 'static) -> Self {
        self.add_policy(policy);
        self
    }

    pub fn add_policy(&mut self, policy: impl CurationPolicy + 'static) {
        self.policies.push(Box::new(policy));
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Rank `pool` against `query`, best first.
    ///
    /// An empty or whitespace-only query is "no filter": the pool comes back
    /// unchanged. Otherwise non-matching candidates are omitted and each
    /// candidate appears at most once.
    pub fn search(&self, query: &str, pool: &[Candidate], index: &KeywordIndex) -> Vec<Candidate> {
        let normalized = normalize(query);
        if split_terms(&normalized).is_empty() {
            return pool.to_vec();
        }

        self.rank(&normalized, pool, index)
            .into_iter()
            .map(|scored| scored.candidate)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps scores and tiers.
    ///
    /// For an empty query every pool entry is returned with score 0 and no
    /// tiers, in pool order.
    pub fn search_scored(
        &self,
        query: &str,
        pool: &[Candidate],
        index: &KeywordIndex,
    ) -> Vec<ScoredCandidate> {
        let normalized = normalize(query);
        if split_terms(&normalized).is_empty() {
            return pool
                .iter()
                .map(|candidate| ScoredCandidate {
                    candidate: candidate.clone(),
                    score: 0,
                    tiers: TierSet::new(),
                })
                .collect();
        }

        self.rank(&normalized, pool, index)
    }

    /// Score, filter and sort. `normalized` has at least one term.
    fn rank(&self, normalized: &str, pool: &[Candidate], index: &KeywordIndex) -> Vec<ScoredCandidate> {
        let terms = split_terms(normalized);
        let mut seen: HashSet<&str> = HashSet::with_capacity(pool.len());
        let mut results = Vec::new();

        for candidate in pool {
            if !seen.insert(candidate.as_str()) {
                continue;
            }

            let Some((organic, tiers)) = score_candidate(&terms, index.keywords(candidate)) else {
                continue;
            };

            // Saturating: an oversized table clamps instead of wrapping
            let curated = self
                .policies
                .iter()
                .map(|policy| policy.bonus(normalized, candidate))
                .fold(0, i64::saturating_add);

            trace!(candidate = %candidate, organic, curated, "candidate qualified");

            results.push(ScoredCandidate {
                candidate: candidate.clone(),
                score: organic.saturating_add(curated),
                tiers,
            });
        }

        // Stable: full ties keep pool order
        results.sort_by(compare_results);
        results
    }
}

/// Organic score for one candidate, or `None` if some term found no keyword.
fn score_candidate(terms: &[&str], keywords: &[String]) -> Option<(i64, TierSet)> {
    let mut acc = CandidateAccumulator::new(terms.len());

    for (seen, term) in terms.iter().enumerate() {
        acc.add_term(score_term(term, keywords));
        if acc.has_missed(seen + 1) {
            return None;
        }
    }

    acc.finish()
}

/// Rank `pool` against `query` with no curation.
pub fn search(query: &str, pool: &[Candidate], index: &KeywordIndex) -> Vec<Candidate> {
    RankedSearchEngine::new().search(query, pool, index)
}
