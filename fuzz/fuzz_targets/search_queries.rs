// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes as queries against the embedded catalog. Search must not
//! panic, must return a subset of the pool with no duplicates, and must keep
//! its ordering invariant.

#![no_main]

use emosearch::{Catalog, RankedSearchEngine, Scope};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|query: &[u8]| {
    static STATE: std::sync::OnceLock<(Catalog, RankedSearchEngine)> = std::sync::OnceLock::new();
    let (catalog, engine) = STATE.get_or_init(|| {
        let catalog = Catalog::embedded().expect("embedded catalog parses");
        let engine = catalog.engine();
        (catalog, engine)
    });

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    let pool = catalog.pool(&Scope::All);
    let scored = engine.search_scored(&query, pool, catalog.keywords());
    let plain = engine.search(&query, pool, catalog.keywords());

    // INVARIANT 1: both entry points agree on the order
    assert_eq!(
        plain,
        scored.iter().map(|s| s.candidate.clone()).collect::<Vec<_>>()
    );

    // INVARIANT 2: results come from the pool, at most once each
    let pool_set: HashSet<&str> = pool.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    for candidate in &plain {
        assert!(pool_set.contains(candidate.as_str()));
        assert!(seen.insert(candidate.as_str()), "duplicate {}", candidate);
    }

    // INVARIANT 3: scores never increase down the list
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // INVARIANT 4: a blank query is the identity
    if query.trim().is_empty() {
        assert_eq!(plain.as_slice(), pool);
    }
});
