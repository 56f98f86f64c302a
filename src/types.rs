// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: candidates, keywords, tiers.
//!
//! A candidate is an opaque token (an emoji grapheme in practice, but nothing
//! here cares). The keyword index maps each candidate to an ordered list of
//! lowercase keywords, and the order matters: the first keyword is the
//! candidate's primary name and earns a bonus when it matches.
//!
//! # Invariants
//!
//! - **KeywordIndex**: keywords are stored lowercased. The index is only
//!   mutated while it is being built; searches take it by shared reference.
//! - **TierSet**: only ever holds the three `MatchTier` bits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit of searchable content. Usually an emoji, but any short string works.
pub type Candidate = String;

// =============================================================================
// MATCH TIERS
// =============================================================================

/// Quality class of a single keyword match.
///
/// Evaluated in declaration order: a keyword equal to the term is `Exact` even
/// though it also starts with and contains the term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

impl MatchTier {
    /// Classify how `keyword` matches `term`, if it does at all.
    #[inline]
    pub fn classify(keyword: &str, term: &str) -> Option<Self> {
        if keyword == term {
            Some(MatchTier::Exact)
        } else if keyword.starts_with(term) {
            Some(MatchTier::Prefix)
        } else if keyword.contains(term) {
            Some(MatchTier::Substring)
        } else {
            None
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            MatchTier::Exact => 0b001,
            MatchTier::Prefix => 0b010,
            MatchTier::Substring => 0b100,
        }
    }

    /// Short label used by the CLI badges.
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
        }
    }
}

/// The set of tiers observed while scoring one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TierSet(u8);

impl TierSet {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, tier: MatchTier) {
        self.0 |= tier.bit();
    }

    #[inline]
    pub fn contains(self, tier: MatchTier) -> bool {
        self.0 & tier.bit() != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: TierSet) -> TierSet {
        TierSet(self.0 | other.0)
    }

    /// Tiers in priority order (exact first).
    pub fn iter(self) -> impl Iterator<Item = MatchTier> {
        [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring]
            .into_iter()
            .filter(move |tier| self.contains(*tier))
    }
}

impl FromIterator<MatchTier> for TierSet {
    fn from_iter<I: IntoIterator<Item = MatchTier>>(iter: I) -> Self {
        let mut set = TierSet::new();
        for tier in iter {
            set.insert(tier);
        }
        set
    }
}

// =============================================================================
// KEYWORD INDEX
// =============================================================================

/// Candidate -> ordered keyword list.
///
/// Lookup is total: an unknown candidate has no keywords and therefore can't
/// match any non-empty query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "HashMap<Candidate, Vec<String>>", into = "HashMap<Candidate, Vec<String>>")]
pub struct KeywordIndex {
    entries: HashMap<Candidate, Vec<String>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword list for a candidate, replacing any previous list.
    ///
    /// Keywords are lowercased here so the search loop never has to.
    pub fn insert<I, S>(&mut self, candidate: impl Into<Candidate>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self.entries.insert(candidate.into(), keywords);
    }

    /// Keywords for `candidate`, or an empty slice when it has none.
    #[inline]
    pub fn keywords(&self, candidate: &str) -> &[String] {
        self.entries
            .get(candidate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains_key(candidate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of keywords across all candidates.
    pub fn keyword_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Candidate, &[String])> {
        self.entries.iter().map(|(c, k)| (c, k.as_slice()))
    }
}

impl From<HashMap<Candidate, Vec<String>>> for KeywordIndex {
    fn from(raw: HashMap<Candidate, Vec<String>>) -> Self {
        let mut index = KeywordIndex::new();
        for (candidate, keywords) in raw {
            index.insert(candidate, keywords);
        }
        index
    }
}

impl From<KeywordIndex> for HashMap<Candidate, Vec<String>> {
    fn from(index: KeywordIndex) -> Self {
        index.entries
    }
}

impl<C, I, S> FromIterator<(C, I)> for KeywordIndex
where
    C: Into<Candidate>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        let mut index = KeywordIndex::new();
        for (candidate, keywords) in iter {
            index.insert(candidate, keywords);
        }
        index
    }
}

// =============================================================================
// SCORED RESULTS
// =============================================================================

/// A candidate with its final score and the tiers that got it there.
///
/// Only exists for the duration of a search; `search` throws these away and
/// returns bare candidates. `search_scored` keeps them for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: i64,
    #[serde(skip)]
    pub tiers: TierSet,
}
