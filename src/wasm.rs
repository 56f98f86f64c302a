// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! Two entry points:
//! - `EmojiPicker`: a picker session over a catalog, plus stateless `search`
//! - `rankEmoji`: the bare engine, for callers that bring their own pool
//!
//! Timestamps come from JavaScript (`performance.now()` or `Date.now()`), so
//! the debouncer runs off the browser's clock and `tick` is driven by a
//! `setTimeout` on the JS side.

use crate::catalog::{Catalog, Scope};
use crate::picker::PickerSession;
use crate::search::RankedSearchEngine;
use crate::types::{Candidate, KeywordIndex};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Category summary for building the tab strip.
#[derive(Serialize)]
struct CategoryOutput<'a> {
    id: &'a str,
    label: &'a str,
    count: usize,
}

fn js_time(now_ms: f64) -> u64 {
    if now_ms.is_finite() && now_ms > 0.0 {
        now_ms as u64
    } else {
        0
    }
}

/// Picker session exposed to JavaScript.
#[wasm_bindgen]
pub struct EmojiPicker {
    session: PickerSession,
}

#[wasm_bindgen]
impl EmojiPicker {
    /// Create a picker from catalog JSON, or the built-in catalog when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: Option<String>) -> Result<EmojiPicker, JsValue> {
        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(&json),
            None => Catalog::embedded(),
        }
        .map_err(|e| e.to_string())?;
        Ok(EmojiPicker {
            session: PickerSession::new(catalog),
        })
    }

    /// Category ids, labels and sizes, in display order.
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        let output: Vec<CategoryOutput> = self
            .session
            .catalog()
            .categories()
            .iter()
            .map(|c| CategoryOutput {
                id: &c.id,
                label: c.display_label(),
                count: c.emojis.len(),
            })
            .collect();
        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Switch category; `"all"` selects everything.
    #[wasm_bindgen(js_name = selectCategory)]
    pub fn select_category(&mut self, id: &str) {
        self.session.select_category(Scope::parse(id));
    }

    /// Feed the input box. Returns true if results changed immediately.
    #[wasm_bindgen]
    pub fn input(&mut self, query: &str, now_ms: f64) -> bool {
        self.session.input(query, js_time(now_ms))
    }

    /// Run a due search. Returns true if results changed.
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.session.tick(js_time(now_ms))
    }

    /// Run the pending search now (e.g. on Enter).
    #[wasm_bindgen]
    pub fn flush(&mut self) -> bool {
        self.session.flush()
    }

    #[wasm_bindgen(js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }

    /// Current results as an array of strings.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_value(self.session.results()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = resultMessage)]
    pub fn result_message(&self) -> Option<String> {
        self.session.result_message()
    }

    /// Collect the `position`-th result. Returns it, or undefined if out of range.
    #[wasm_bindgen]
    pub fn pick(&mut self, position: usize) -> Option<String> {
        self.session.pick(position).cloned()
    }

    /// Collect an emoji directly (e.g. clicked from a category grid).
    #[wasm_bindgen(js_name = pickEmoji)]
    pub fn pick_emoji(&mut self, emoji: &str) {
        self.session.pick_candidate(emoji);
    }

    /// Collected emoji as one string, ready for the clipboard.
    #[wasm_bindgen]
    pub fn collected(&self) -> String {
        self.session.collector().text()
    }

    #[wasm_bindgen(js_name = clearCollector)]
    pub fn clear_collector(&mut self) {
        self.session.clear_collector();
    }

    /// One-off ranked search that leaves the session untouched.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, category: Option<String>) -> Result<JsValue, JsValue> {
        let scope = category.as_deref().map(Scope::parse).unwrap_or_default();
        let results = self
            .session
            .catalog()
            .search_in(self.session.engine(), query, &scope);
        to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Rank `pool` (string array) against `query` using `index`
/// (`{ emoji: [keywords] }`). No curation.
#[wasm_bindgen(js_name = rankEmoji)]
pub fn rank_emoji(query: &str, pool: JsValue, index: JsValue) -> Result<JsValue, JsValue> {
    let pool: Vec<Candidate> = from_value(pool).map_err(|e| e.to_string())?;
    let index: KeywordIndex = from_value(index).map_err(|e| e.to_string())?;
    let results = RankedSearchEngine::new().search(query, &pool, &index);
    to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
}
