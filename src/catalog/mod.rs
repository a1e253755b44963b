// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog snapshots: loading, statistics, and a query facade.
//!
//! `Catalog` owns one `RecordStore` and exposes every query the engines
//! offer, so callers that don't care about engine lifetimes can just open a
//! file and search it.
//!
//! ```ignore
//! let catalog = Catalog::open("packages.json")?;
//! let hits = catalog.search("D15", 10, DEFAULT_THRESHOLD, FieldScope::Both);
//! let exact = catalog.exact_match("big70");
//! ```

mod loader;
mod stats;

pub use loader::{load_catalog, load_records, load_records_csv, parse_records, parse_records_csv};
pub use stats::{CatalogStats, NumericSummary};

use std::path::Path;

use crate::error::{CatalogError, SearchError};
use crate::search::{PatternEngine, SearchFilters, SimilarityEngine};
use crate::store::RecordStore;
use crate::types::{FieldScope, Record, RegexScope, ScoredResult};

/// A loaded catalog plus the query surface over it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: RecordStore,
}

impl Catalog {
    /// Load a JSON or CSV snapshot from disk (chosen by extension).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Ok(Self::from_records(load_catalog(path)?))
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            store: RecordStore::new(records),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn similarity(&self) -> SimilarityEngine<'_> {
        SimilarityEngine::new(&self.store)
    }

    pub fn search(
        &self,
        query: &str,
        limit: usize,
        threshold: f64,
        scope: FieldScope,
    ) -> Vec<ScoredResult> {
        self.similarity().search(query, limit, threshold, scope)
    }

    pub fn search_by_code(&self, code: &str, threshold: f64, limit: usize) -> Vec<ScoredResult> {
        self.similarity().search_by_code(code, threshold, limit)
    }

    pub fn search_by_name(&self, name: &str, threshold: f64, limit: usize) -> Vec<ScoredResult> {
        self.similarity().search_by_name(name, threshold, limit)
    }

    pub fn search_with_filters(
        &self,
        query: &str,
        filters: &SearchFilters,
        threshold: f64,
        limit: usize,
    ) -> Vec<ScoredResult> {
        self.similarity()
            .search_with_filters(query, filters, threshold, limit)
    }

    pub fn exact_match(&self, code: &str) -> Option<ScoredResult> {
        self.similarity().exact_match(code)
    }

    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        self.similarity().suggest(partial, limit)
    }

    pub fn search_regex(
        &self,
        pattern: &str,
        scope: RegexScope,
        case_sensitive: bool,
        limit: usize,
    ) -> Result<Vec<ScoredResult>, SearchError> {
        PatternEngine::new(&self.store).search_regex(pattern, scope, case_sensitive, limit)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(self.store.iter().map(|r| r.as_ref()))
    }
}
