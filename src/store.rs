// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: an immutable, ordered snapshot of one dataset load.
//!
//! Built once, queried many times, never mutated. The folded code and name
//! lists are derived at construction so every query reuses them; the only
//! way to invalidate them is to build a new store.
//!
//! # Iteration order
//!
//! Records keep the order they were loaded in. Regex scanning stops at the
//! limit, so this order decides which matches win when there are more than
//! `limit` of them. Filtered sub-stores preserve the relative order.
//!
//! # Sharing
//!
//! Records live behind `Arc`. Sub-stores and result lists share them instead
//! of copying, and a store can be read from many threads at once.

use std::sync::Arc;

use crate::search::filters::SearchFilters;
use crate::types::{Record, TextField};
use crate::utils::fold;

/// Ordered, immutable collection of records plus derived search indices.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Arc<Record>>,
    /// Folded `code` of each record, parallel to `records`.
    codes: Vec<String>,
    /// Folded `name` of each record ("" when absent or a placeholder).
    /// `None` when no record in the dataset carries a name.
    names: Option<Vec<String>>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self::from_shared(records.into_iter().map(Arc::new).collect())
    }

    /// Build a store over records that are already shared with another store.
    pub fn from_shared(records: Vec<Arc<Record>>) -> Self {
        let codes = records.iter().map(|r| fold(&r.code)).collect();

        let has_names = records.iter().any(|r| r.name.is_some());
        let names = has_names.then(|| {
            records
                .iter()
                .map(|r| r.text(TextField::Name).map(fold).unwrap_or_default())
                .collect()
        });

        Self {
            records,
            codes,
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Record>> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Record>> + '_ {
        self.records.iter()
    }

    /// Folded codes, parallel to `records()`.
    pub fn folded_codes(&self) -> &[String] {
        &self.codes
    }

    /// Folded names, parallel to `records()`, if the dataset has a name column.
    pub fn folded_names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Does this dataset support name-scope search?
    ///
    /// Some source schemas carry only codes. Name-scope queries against them
    /// contribute zero candidates instead of failing.
    pub fn supports_name_search(&self) -> bool {
        self.names.is_some()
    }

    /// A new store holding only the records that pass `filters`, in order.
    ///
    /// Indices are re-derived for the subset.
    pub fn filtered(&self, filters: &SearchFilters) -> RecordStore {
        let kept = self
            .records
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect();
        RecordStore::from_shared(kept)
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        RecordStore::new(iter.into_iter().collect())
    }
}
