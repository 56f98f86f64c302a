// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The picker session: caller-side state around the engine.
//!
//! The engine is stateless. Everything stateful an emoji picker needs lives
//! here instead: which category is selected, what the user is typing, when
//! to actually search, what the last results were, and what has been picked.
//!
//! Typing goes through a [`Debouncer`]; a search runs on `tick` once the
//! input has been quiet for the configured delay. Clearing the input is not
//! debounced: the scope's full pool comes back immediately.

mod collector;
mod debounce;

pub use collector::Collector;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};

use crate::catalog::{Catalog, Scope};
use crate::search::RankedSearchEngine;
use crate::types::Candidate;
use crate::utils::{normalize, split_terms};
use tracing::debug;

/// How many results the multi-term debug log shows.
const LOGGED_TOP_RESULTS: usize = 5;

/// One user's picker state over a catalog.
#[derive(Debug)]
pub struct PickerSession {
    catalog: Catalog,
    engine: RankedSearchEngine,
    scope: Scope,
    query: String,
    debouncer: Debouncer<String>,
    results: Vec<Candidate>,
    collector: Collector,
}

impl PickerSession {
    /// A session over `catalog`, showing everything, with the default delay.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_delay(catalog, DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_delay(catalog: Catalog, delay_ms: u64) -> Self {
        let engine = catalog.engine();
        let results = catalog.all().to_vec();
        Self {
            catalog,
            engine,
            scope: Scope::All,
            query: String::new(),
            debouncer: Debouncer::new(delay_ms),
            results,
            collector: Collector::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The engine built from the catalog's curation.
    pub fn engine(&self) -> &RankedSearchEngine {
        &self.engine
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The normalized query behind the current results; empty when unfiltered.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Candidate] {
        &self.results
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Switch scope. Clears the query and any pending search.
    pub fn select_category(&mut self, scope: Scope) {
        debug!(%scope, "category selected");
        self.debouncer.cancel();
        self.scope = scope;
        self.show_pool();
    }

    /// Feed raw input. Returns `true` if results changed right away (the
    /// input was cleared), `false` if a search was scheduled.
    pub fn input(&mut self, raw: &str, now_ms: u64) -> bool {
        if split_terms(&normalize(raw)).is_empty() {
            self.debouncer.cancel();
            self.show_pool();
            return true;
        }
        self.debouncer.submit(raw.to_string(), now_ms);
        false
    }

    /// Run the pending search if it is due. Returns `true` if it ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.debouncer.poll(now_ms) {
            Some(raw) => {
                self.run_search(&raw);
                true
            }
            None => false,
        }
    }

    /// Run the pending search now, whatever the time.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(raw) => {
                self.run_search(&raw);
                true
            }
            None => false,
        }
    }

    /// Search immediately, bypassing the debouncer.
    pub fn search_now(&mut self, raw: &str) {
        self.debouncer.cancel();
        if split_terms(&normalize(raw)).is_empty() {
            self.show_pool();
        } else {
            self.run_search(raw);
        }
    }

    /// Add the `position`-th current result to the collector.
    pub fn pick(&mut self, position: usize) -> Option<&Candidate> {
        let candidate = self.results.get(position)?.clone();
        self.collector.push(candidate);
        self.collector.picks().last()
    }

    /// Add an arbitrary candidate to the collector.
    pub fn pick_candidate(&mut self, candidate: &str) {
        self.collector.push(candidate);
    }

    pub fn clear_collector(&mut self) {
        self.collector.clear();
    }

    /// The "N results for q" line, or `None` when no query is active.
    pub fn result_message(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(if self.results.is_empty() {
            format!("\"{}\" 검색 결과가 없습니다.", self.query)
        } else {
            format!("\"{}\" 검색 결과: {}개", self.query, self.results.len())
        })
    }

    fn show_pool(&mut self) {
        self.query.clear();
        self.results = self.catalog.pool(&self.scope).to_vec();
    }

    fn run_search(&mut self, raw: &str) {
        self.query = normalize(raw);
        self.results = self.catalog.search_in(&self.engine, &self.query, &self.scope);

        debug!(query = %self.query, scope = %self.scope, results = self.results.len(), "search");
        if split_terms(&self.query).len() > 1 {
            let top = &self.results[..self.results.len().min(LOGGED_TOP_RESULTS)];
            debug!(query = %self.query, ?top, "multi-term search");
        }
    }
}
