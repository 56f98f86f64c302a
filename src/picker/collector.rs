// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::Candidate;

/// Accumulates picked candidates into one string, in pick order.
///
/// Picking the same candidate twice appends it twice; this is a scratch pad,
/// not a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collector {
    picks: Vec<Candidate>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: impl Into<Candidate>) {
        self.picks.push(candidate.into());
    }

    /// Everything picked so far, concatenated.
    pub fn text(&self) -> String {
        self.picks.concat()
    }

    pub fn picks(&self) -> &[Candidate] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
