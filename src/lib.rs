// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted multi-term emoji search.
//!
//! Given a query, a pool of candidates and a keyword list per candidate, the
//! engine scores every candidate against every query term, keeps only those
//! matching all terms, adds curated bonuses, and returns the survivors best
//! first. Around that sits a catalog loader, a debounced picker session with
//! a collector, a CLI and (behind the `wasm` feature) browser bindings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog.rs │────▶│  search/     │◀────│  curation.rs │
//! │ (pools,     │     │ (engine,     │     │ (overrides,  │
//! │  keywords)  │     │  accumulator)│     │  group boost)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐
//! │  picker/    │     │  scoring/    │
//! │ (debounce,  │     │ (tiers,      │
//! │  collector) │     │  ranking)    │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use emosearch::{search, KeywordIndex};
//!
//! let index: KeywordIndex = [
//!     ("🍎", vec!["apple", "red"]),
//!     ("🍍", vec!["pineapple"]),
//! ]
//! .into_iter()
//! .collect();
//! let pool = vec!["🍍".to_string(), "🍎".to_string()];
//!
//! assert_eq!(search("apple", &pool, &index), vec!["🍎", "🍍"]);
//! ```

pub mod catalog;
pub mod curation;
pub mod picker;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, CatalogError, CatalogStats, Category, CurationConfig, GroupBoostDef, Scope};
pub use curation::{CuratedBonuses, CurationPolicy, GroupBoost, DEFAULT_GROUP_BONUS};
pub use picker::{Collector, Debouncer, PickerSession, DEFAULT_DEBOUNCE_MS};
pub use search::{search, RankedSearchEngine};
pub use types::{Candidate, KeywordIndex, MatchTier, ScoredCandidate, TierSet};
pub use utils::{normalize, split_terms};
