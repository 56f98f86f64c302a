// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Candidate, KeywordIndex};

/// Build a pool from string slices.
pub fn make_pool(items: &[&str]) -> Vec<Candidate> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a keyword index from `(candidate, keywords)` pairs.
pub fn make_index(entries: &[(&str, &[&str])]) -> KeywordIndex {
    entries
        .iter()
        .map(|(candidate, keywords)| (*candidate, keywords.iter().copied()))
        .collect()
}

/// A small mixed Korean/English index with a few deliberate overlaps.
///
/// "하트" hits several hearts at different tiers; "apple" is exact for 🍎,
/// substring-only for 🍍.
pub fn sample_index() -> KeywordIndex {
    [
        ("❤️", vec!["빨간하트", "하트", "사랑", "red heart", "heart", "love"]),
        ("💕", vec!["두개하트", "하트", "사랑", "two hearts"]),
        ("💔", vec!["깨진하트", "하트", "이별", "broken heart"]),
        ("😀", vec!["웃음", "미소", "smile", "grin"]),
        ("😂", vec!["웃음", "눈물", "joy", "tears"]),
        ("😢", vec!["슬픔", "눈물", "cry", "sad"]),
        ("🍎", vec!["apple", "사과", "red", "fruit"]),
        ("🍍", vec!["pineapple", "파인애플", "fruit"]),
        ("🍕", vec!["pizza", "피자", "food"]),
    ]
    .into_iter()
    .collect()
}

/// Pool in the same order as [`sample_index`].
pub fn sample_pool() -> Vec<Candidate> {
    make_pool(&["❤️", "💕", "💔", "😀", "😂", "😢", "🍎", "🍍", "🍕"])
}
