// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Curated bonuses: hand-picked answers for known ambiguous queries.
//!
//! Keyword scoring can't tell that "하트" should put the red heart first; a
//! dozen heart emoji all have "하트" as a keyword. Curation policies fix that
//! by adding flat bonuses for specific (query, candidate) pairs. They run
//! only for candidates that already matched every term, so they can reorder
//! results but never add to them.
//!
//! Two policies ship here:
//! - [`CuratedBonuses`]: a query -> candidate -> bonus table. Bonuses can be
//!   large enough to pin a candidate above anything organic.
//! - [`GroupBoost`]: a flat bonus for members of a group (usually a catalog
//!   category) when the query is one of its trigger queries.

use crate::types::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Default bonus for group membership.
pub const DEFAULT_GROUP_BONUS: i64 = 200;

/// Extra score for a (normalized query, candidate) pair.
///
/// Implementations must be pure: the engine may call them any number of
/// times, from any thread.
pub trait CurationPolicy: Send + Sync + std::fmt::Debug {
    fn bonus(&self, query: &str, candidate: &str) -> i64;
}

// =============================================================================
// CURATED OVERRIDE TABLE
// =============================================================================

/// Query -> candidate -> bonus.
///
/// Query keys are stored normalized (trimmed, lowercased) so they line up
/// with what the engine looks up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, HashMap<Candidate, i64>>",
    into = "HashMap<String, HashMap<Candidate, i64>>"
)]
pub struct CuratedBonuses {
    table: HashMap<String, HashMap<Candidate, i64>>,
}

impl CuratedBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `bonus` for the pair. Repeated inserts for the same pair accumulate,
    /// saturating at the `i64` bounds.
    pub fn insert(&mut self, query: &str, candidate: impl Into<Candidate>, bonus: i64) {
        let total = self
            .table
            .entry(crate::utils::normalize(query))
            .or_default()
            .entry(candidate.into())
            .or_insert(0);
        *total = total.saturating_add(bonus);
    }

    /// Merge another table into this one, accumulating shared pairs.
    pub fn extend(&mut self, other: &CuratedBonuses) {
        for (query, entries) in &other.table {
            for (candidate, bonus) in entries {
                self.insert(query, candidate.clone(), *bonus);
            }
        }
    }

    /// Bonus for the pair, 0 when absent.
    pub fn get(&self, query: &str, candidate: &str) -> i64 {
        self.table
            .get(query)
            .and_then(|entries| entries.get(candidate))
            .copied()
            .unwrap_or(0)
    }

    /// Queries with at least one entry.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<HashMap<String, HashMap<Candidate, i64>>> for CuratedBonuses {
    fn from(raw: HashMap<String, HashMap<Candidate, i64>>) -> Self {
        let mut curated = CuratedBonuses::new();
        for (query, entries) in raw {
            for (candidate, bonus) in entries {
                curated.insert(&query, candidate, bonus);
            }
        }
        curated
    }
}

impl From<CuratedBonuses> for HashMap<String, HashMap<Candidate, i64>> {
    fn from(curated: CuratedBonuses) -> Self {
        curated.table
    }
}

impl CurationPolicy for CuratedBonuses {
    fn bonus(&self, query: &str, candidate: &str) -> i64 {
        self.get(query, candidate)
    }
}

// =============================================================================
// GROUP MEMBERSHIP BOOST
// =============================================================================

/// Flat bonus for group members when the query is a trigger query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBoost {
    members: HashSet<Candidate>,
    queries: HashSet<String>,
    bonus: i64,
}

impl GroupBoost {
    pub fn new<M, Q, S>(members: M, queries: Q, bonus: i64) -> Self
    where
        M: IntoIterator<Item = Candidate>,
        Q: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            members: members.into_iter().collect(),
            queries: queries
                .into_iter()
                .map(|q| crate::utils::normalize(q.as_ref()))
                .collect(),
            bonus,
        }
    }

    pub fn bonus_value(&self) -> i64 {
        self.bonus
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl CurationPolicy for GroupBoost {
    fn bonus(&self, query: &str, candidate: &str) -> i64 {
        if self.queries.contains(query) && self.members.contains(candidate) {
            self.bonus
        } else {
            0
        }
    }
}
