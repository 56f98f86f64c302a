// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for query processing.

/// Normalize a query for matching: lowercase and trim.
///
/// Inner whitespace is left alone; `split_terms` takes care of it. The
/// normalized form is also the key into the curated bonus tables, so
/// "  하트 " and "하트" hit the same entry.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a normalized query into terms on runs of whitespace.
///
/// No minimum length: a single character is a valid term and will match
/// anything containing it.
pub fn split_terms(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Length in Unicode scalar values, used for the length-affinity bonus.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
