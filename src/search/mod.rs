// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where keywords, scoring and curation meet.
//!
//! `engine` owns the public entry points. `accumulator` tracks one
//! candidate's progress through the query terms so the engine can apply the
//! AND gate and the candidate-level bonuses in one place.

mod accumulator;
pub mod engine;

pub use engine::{search, RankedSearchEngine};
