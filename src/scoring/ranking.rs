// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Exact tier** - a candidate with an exact match beats one without
//! 3. **Prefix tier** - then one with a prefix match beats one without
//!
//! Anything still tied compares `Equal`. Callers sort stably, so remaining
//! ties keep pool order.

use crate::types::{MatchTier, ScoredCandidate};
use std::cmp::Ordering;

/// Compare two scored candidates for ranking. `Less` means `a` ranks first.
pub fn compare_results(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| tier_presence(a, b, MatchTier::Exact))
        .then_with(|| tier_presence(a, b, MatchTier::Prefix))
}

/// `Less` when only `a` has `tier`, `Greater` when only `b` has it.
fn tier_presence(a: &ScoredCandidate, b: &ScoredCandidate, tier: MatchTier) -> Ordering {
    // true sorts after false, so compare b to a
    b.tiers.contains(tier).cmp(&a.tiers.contains(tier))
}
