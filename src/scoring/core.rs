// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every keyword of a candidate is checked against every query term. A
//! keyword that matches contributes its tier score plus two small bonuses;
//! everything sums. Once a candidate has matched every term, two
//! candidate-level bonuses are added on top.
//!
//! # Constants
//!
//! | Bonus            | Score | Applies when                                   |
//! |------------------|-------|------------------------------------------------|
//! | Exact            | 150   | keyword == term                                |
//! | Prefix           | 100   | keyword starts with term                       |
//! | Substring        | 60    | keyword contains term                          |
//! | Primary keyword  | 30    | the matching keyword is the first in the list  |
//! | Length affinity  | 20    | matching keyword within 2 chars of the term    |
//! | Tier diversity   | 25    | more than one tier seen across the candidate   |
//! | Multi-term       | 100/t | query has more than one term, per term         |
//!
//! The tier scores must stay strictly ordered (exact > prefix > substring);
//! the tests below check that.

use crate::types::{MatchTier, TierSet};
use crate::utils::char_len;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for a keyword equal to the term.
pub const EXACT_SCORE: i64 = 150;

/// Score for a keyword starting with the term.
pub const PREFIX_SCORE: i64 = 100;

/// Score for a keyword containing the term anywhere else.
pub const SUBSTRING_SCORE: i64 = 60;

/// Bonus when the matching keyword is the candidate's first (primary) keyword.
pub const PRIMARY_KEYWORD_BONUS: i64 = 30;

/// Bonus when a matching keyword's length is close to the term's.
pub const LENGTH_AFFINITY_BONUS: i64 = 20;

/// Maximum length difference (in chars) that still earns the affinity bonus.
pub const LENGTH_AFFINITY_WINDOW: usize = 2;

/// Bonus when more than one distinct tier was observed for a candidate.
pub const TIER_DIVERSITY_BONUS: i64 = 25;

/// Per-term bonus for multi-term queries where every term matched.
pub const MULTI_TERM_BONUS_PER_TERM: i64 = 100;

/// Base score for a tier.
pub fn tier_score(tier: MatchTier) -> i64 {
    match tier {
        MatchTier::Exact => EXACT_SCORE,
        MatchTier::Prefix => PREFIX_SCORE,
        MatchTier::Substring => SUBSTRING_SCORE,
    }
}

/// How well one term matched one candidate's keyword list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermScore {
    /// Sum of contributions from every matching keyword.
    pub score: i64,
    /// Tiers seen for this term.
    pub tiers: TierSet,
}

impl TermScore {
    /// A term matched if at least one keyword triggered a tier.
    #[inline]
    pub fn matched(&self) -> bool {
        !self.tiers.is_empty()
    }
}

/// Score a single keyword against a term.
///
/// Returns `None` when the keyword doesn't match. `position` is the keyword's
/// index in the candidate's list; position 0 is the primary keyword.
pub fn keyword_score(keyword: &str, term: &str, position: usize) -> Option<(i64, MatchTier)> {
    let tier = MatchTier::classify(keyword, term)?;
    let mut score = tier_score(tier);

    if position == 0 {
        score += PRIMARY_KEYWORD_BONUS;
    }

    if char_len(keyword).abs_diff(char_len(term)) <= LENGTH_AFFINITY_WINDOW {
        score += LENGTH_AFFINITY_BONUS;
    }

    Some((score, tier))
}

/// Score one term against a candidate's whole keyword list.
///
/// A term may match several keywords of the same candidate; each one adds
/// its own contribution.
pub fn score_term(term: &str, keywords: &[String]) -> TermScore {
    keywords
        .iter()
        .enumerate()
        .filter_map(|(position, keyword)| keyword_score(keyword, term, position))
        .fold(TermScore::default(), |mut acc, (score, tier)| {
            acc.score += score;
            acc.tiers.insert(tier);
            acc
        })
}

/// Candidate-level bonuses, applied once every term has matched.
pub fn qualification_bonus(tiers: TierSet, term_count: usize) -> i64 {
    let mut bonus = 0;

    if tiers.len() > 1 {
        bonus += TIER_DIVERSITY_BONUS;
    }

    if term_count > 1 {
        bonus += MULTI_TERM_BONUS_PER_TERM * term_count as i64;
    }

    bonus
}
