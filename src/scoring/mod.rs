// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! Scores are plain integers built from a handful of additive bonuses. The
//! numbers are hand-tuned rather than derived, so they live in one place as
//! named constants and the tests pin their relative order.

mod core;
pub mod ranking;

pub use core::*;
