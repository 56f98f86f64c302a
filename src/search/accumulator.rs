// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::scoring::{qualification_bonus, TermScore};
use crate::types::TierSet;

/// Accumulator for multi-term score summing on a single candidate.
///
/// Tracks the running score, the union of tiers seen, and how many query
/// terms found a keyword. A candidate only qualifies when every term did
/// (AND semantics); partial scores of non-qualifying candidates are thrown
/// away.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CandidateAccumulator {
    score: i64,
    tiers: TierSet,
    matched_terms: usize,
    num_terms: usize,
}

impl CandidateAccumulator {
    pub(crate) fn new(num_terms: usize) -> Self {
        Self {
            score: 0,
            tiers: TierSet::new(),
            matched_terms: 0,
            num_terms,
        }
    }

    /// Fold one term's result in. Unmatched terms contribute nothing.
    #[inline]
    pub(crate) fn add_term(&mut self, term: TermScore) {
        if term.matched() {
            self.matched_terms += 1;
            self.score += term.score;
            self.tiers = self.tiers.union(term.tiers);
        }
    }

    /// Whether some term has already failed. Lets the caller stop early.
    #[inline]
    pub(crate) fn has_missed(&self, terms_seen: usize) -> bool {
        self.matched_terms < terms_seen
    }

    /// Final (score, tiers) if every term matched, with the candidate-level
    /// bonuses applied.
    pub(crate) fn finish(self) -> Option<(i64, TierSet)> {
        if self.num_terms == 0 || self.matched_terms != self.num_terms {
            return None;
        }
        let score = self.score + qualification_bonus(self.tiers, self.num_terms);
        Some((score, self.tiers))
    }
}
