// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the emosearch command-line interface.
//!
//! Four subcommands: `search` for a one-shot ranked query, `categories` to
//! list what the catalog holds, `inspect` for catalog statistics or one
//! candidate's keywords and curation, and `repl` for an interactive picker session. Every command
//! runs against the embedded catalog unless `--catalog` points elsewhere.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "emosearch",
    about = "Weighted multi-term emoji search",
    version
)]
pub struct Cli {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank emoji for a query
    Search {
        /// Search query; several words narrow the results
        query: String,

        /// Restrict the search to one category id
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Show scores and match tiers for each result
        #[arg(long)]
        scores: bool,
    },

    /// List catalog categories
    Categories,

    /// Catalog statistics, or keywords and curation for one emoji
    Inspect {
        /// The emoji to inspect; omit for catalog-wide statistics
        emoji: Option<String>,
    },

    /// Interactive picker: type to search, pick results into a collector
    ///
    /// Lines starting with `:` are commands: `:cat ID`, `:all`, `:pick N`,
    /// `:copy`, `:clear`, `:quit`. Anything else is a query.
    Repl {
        /// Category to start in
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Maximum number of results to show per query
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}
