// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog loading.
//!
//! Malformed JSON must come back as a `CatalogError`, never a panic. Anything
//! that does load must produce a deduplicated "all" pool and a usable engine.

#![no_main]

use emosearch::{Catalog, Scope};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = Catalog::from_json(json) else {
        return;
    };

    let mut seen = HashSet::new();
    assert!(catalog.all().iter().all(|c| seen.insert(c.as_str())));

    let engine = catalog.engine();
    for category in catalog.categories() {
        let _ = catalog.search_in(&engine, &category.id, &Scope::Category(category.id.clone()));
    }
});
