// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication by package code.
//!
//! A package should appear at most once in a result list. Sounds obvious, but
//! the fuzzy engine scans two fields, and the same code can match in both; the
//! raw dataset can also repeat a code across rows. `ResultMerger` keys on the
//! folded code only, so there is no way to merge "the same package, different
//! field" twice.
//!
//! **Invariant**: each folded code appears at most once in merged results.
//!
//! **Tie-break**: the first result merged for a code wins. The fuzzy engine
//! merges code hits before name hits, so a code match always beats a name
//! match for the same package, even when the name scored higher.

use std::collections::HashSet;

use crate::scoring::ranking::rank;
use crate::types::ScoredResult;
use crate::utils::fold;

/// First-seen-wins result merger keyed by folded code.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// for hit in code_hits {
///     merger.merge(hit);
/// }
/// for hit in name_hits {
///     merger.merge(hit); // ignored if the code is already present
/// }
/// let results = merger.into_ranked(limit);
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger {
    seen: HashSet<String>,
    results: Vec<ScoredResult>,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            results: Vec::with_capacity(capacity),
        }
    }

    /// Merge a result unless its code is already present.
    ///
    /// Returns `true` if the result was kept.
    pub fn merge(&mut self, result: ScoredResult) -> bool {
        if !self.seen.insert(fold(result.code())) {
            return false;
        }
        self.results.push(result);
        true
    }

    /// Merge several results in order.
    pub fn merge_all(&mut self, results: impl IntoIterator<Item = ScoredResult>) {
        for result in results {
            self.merge(result);
        }
    }

    /// Is a package with this code already merged? Case-insensitive.
    pub fn contains(&self, code: &str) -> bool {
        self.seen.contains(&fold(code))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sort descending by score and keep the first `limit`.
    pub fn into_ranked(self, limit: usize) -> Vec<ScoredResult> {
        let mut results = self.results;
        rank(&mut results, limit);
        results
    }

    /// Results in merge order, untouched.
    pub fn into_unranked(self) -> Vec<ScoredResult> {
        self.results
    }
}
