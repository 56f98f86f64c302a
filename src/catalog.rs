// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: grouped candidates, their keywords, and curation data.
//!
//! This is the collaborator that feeds the engine. It loads once, validates,
//! and from then on only hands out read-only pools and the keyword index.
//!
//! # Format
//!
//! ```json
//! {
//!   "categories": [
//!     { "id": "love", "label": "사랑", "emojis": ["❤️", "💕"] }
//!   ],
//!   "keywords": { "❤️": ["하트", "빨간하트", "heart"] },
//!   "curation": {
//!     "overrides": { "하트": { "❤️": 500 } },
//!     "pins": { "하트": { "❤️": 10000000 } },
//!     "groupBoosts": [{ "category": "love", "queries": ["하트"], "bonus": 200 }]
//!   }
//! }
//! ```
//!
//! Category order is display order, and it also decides which copy of a
//! duplicated candidate survives in the "all" pool: the first one.

use crate::curation::{CuratedBonuses, GroupBoost, DEFAULT_GROUP_BONUS};
use crate::search::RankedSearchEngine;
use crate::types::{Candidate, KeywordIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The catalog compiled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Everything that can go wrong loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("category at position {0} has an empty id")]
    EmptyCategoryId(usize),

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("group boost references unknown category '{0}'")]
    UnknownGroupCategory(String),
}

// =============================================================================
// RAW FORMAT
// =============================================================================

/// A named group of candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub emojis: Vec<Candidate>,
}

impl Category {
    /// Display label, falling back to the id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Group boost as written in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBoostDef {
    pub category: String,
    pub queries: Vec<String>,
    #[serde(default = "default_group_bonus")]
    pub bonus: i64,
}

fn default_group_bonus() -> i64 {
    DEFAULT_GROUP_BONUS
}

/// Curation section of the catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationConfig {
    #[serde(default)]
    pub overrides: CuratedBonuses,
    /// Same shape as `overrides`, kept apart because these values are meant
    /// to dwarf every organic score.
    #[serde(default)]
    pub pins: CuratedBonuses,
    #[serde(default)]
    pub group_boosts: Vec<GroupBoostDef>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    categories: Vec<Category>,
    #[serde(default)]
    keywords: KeywordIndex,
    #[serde(default)]
    curation: CurationConfig,
}

// =============================================================================
// SCOPE
// =============================================================================

/// Which part of the catalog a search runs over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    #[default]
    All,
    Category(String),
}

impl Scope {
    /// `"all"` (any case) or empty means everything; anything else is a
    /// category id.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Scope::All
        } else {
            Scope::Category(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::All => write!(f, "all"),
            Scope::Category(id) => write!(f, "{}", id),
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Summary counts over a loaded catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub categories: usize,
    /// Category entries, counting shared candidates once per category.
    pub entries: usize,
    /// Distinct candidates (the "all" pool).
    pub unique: usize,
    pub keywords: usize,
    pub without_keywords: usize,
    /// Keyword entries for candidates no category lists.
    pub orphaned_keywords: usize,
    pub curated_pairs: usize,
    pub group_boosts: usize,
}

/// A validated, read-only catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    keywords: KeywordIndex,
    curation: CurationConfig,
    all: Vec<Candidate>,
}

impl Catalog {
    /// Build from parts, validating category ids and group boosts.
    pub fn new(
        categories: Vec<Category>,
        keywords: KeywordIndex,
        curation: CurationConfig,
    ) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for (position, category) in categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryId(position));
            }
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        if let Some(missing) = curation
            .group_boosts
            .iter()
            .find(|boost| !ids.contains(boost.category.as_str()))
        {
            return Err(CatalogError::UnknownGroupCategory(missing.category.clone()));
        }

        let all = flatten_unique(&categories);
        let catalog = Self {
            categories,
            keywords,
            curation,
            all,
        };

        let stats = catalog.stats();
        if stats.without_keywords > 0 {
            warn!(
                count = stats.without_keywords,
                "catalog candidates without keywords can never match a query"
            );
        }
        if stats.orphaned_keywords > 0 {
            debug!(
                count = stats.orphaned_keywords,
                "keyword entries for candidates in no category"
            );
        }

        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.keywords, raw.curation)
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            candidates = catalog.all.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load `path` if given, otherwise the embedded catalog.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }

    pub fn curation(&self) -> &CurationConfig {
        &self.curation
    }

    /// Counts for diagnostics.
    pub fn stats(&self) -> CatalogStats {
        let listed: HashSet<&str> = self.all.iter().map(String::as_str).collect();
        CatalogStats {
            categories: self.categories.len(),
            entries: self.categories.iter().map(|c| c.emojis.len()).sum(),
            unique: self.all.len(),
            keywords: self.keywords.keyword_count(),
            without_keywords: self
                .all
                .iter()
                .filter(|c| self.keywords.keywords(c.as_str()).is_empty())
                .count(),
            orphaned_keywords: self
                .keywords
                .iter()
                .filter(|(candidate, _)| !listed.contains(candidate.as_str()))
                .count(),
            curated_pairs: self.curation.overrides.len() + self.curation.pins.len(),
            group_boosts: self.curation.group_boosts.len(),
        }
    }

    /// Every candidate, categories in order, duplicates removed.
    pub fn all(&self) -> &[Candidate] {
        &self.all
    }

    /// The pool a scope selects. Unknown categories select nothing.
    pub fn pool(&self, scope: &Scope) -> &[Candidate] {
        match scope {
            Scope::All => &self.all,
            Scope::Category(id) => self
                .category(id)
                .map(|c| c.emojis.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// An engine carrying this catalog's curation.
    ///
    /// Overrides and pins go in first, then one [`GroupBoost`] per
    /// configured group.
    pub fn engine(&self) -> RankedSearchEngine {
        let mut engine = RankedSearchEngine::new();
        for table in [&self.curation.overrides, &self.curation.pins] {
            if !table.is_empty() {
                engine.add_policy(table.clone());
            }
        }
        for def in &self.curation.group_boosts {
            let members = self.pool(&Scope::Category(def.category.clone())).to_vec();
            engine.add_policy(GroupBoost::new(members, &def.queries, def.bonus));
        }
        engine
    }

    /// Search within a scope using a prepared engine.
    pub fn search_in(&self, engine: &RankedSearchEngine, query: &str, scope: &Scope) -> Vec<Candidate> {
        engine.search(query, self.pool(scope), &self.keywords)
    }
}

fn flatten_unique(categories: &[Category]) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .flat_map(|c| c.emojis.iter())
        .filter(|candidate| seen.insert(candidate.as_str()))
        .cloned()
        .collect()
}
