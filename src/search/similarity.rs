// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The similarity engine: ranked fuzzy search over codes and names.
//!
//! ```text
//! query ──fold──▶ scan codes ──┐
//!                              ├──▶ ResultMerger ──▶ rank ──▶ truncate(limit)
//!            ──▶ scan names ───┘    (code wins)      (score desc)
//! ```
//!
//! Each scan scores every folded candidate with `wratio`, drops anything below
//! the threshold, and orders the survivors best-first. Code hits are merged
//! before name hits, so when a package matches on both it is reported with
//! its code match, whatever the name scored.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::fuzzy::{partial_ratio, wratio};
use crate::scoring::{clamp_threshold, passes_threshold, MAX_SCORE, SUGGEST_MIN_SCORE};
use crate::search::dedup::ResultMerger;
use crate::search::filters::SearchFilters;
use crate::store::RecordStore;
use crate::types::{FieldScope, MatchedField, ScoredResult};
use crate::utils::fold;

/// Fuzzy search over a borrowed record store.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityEngine<'s> {
    store: &'s RecordStore,
}

impl<'s> SimilarityEngine<'s> {
    pub fn new(store: &'s RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'s RecordStore {
        self.store
    }

    /// Ranked fuzzy search.
    ///
    /// - Empty or whitespace-only query, or `limit == 0`: empty list
    /// - Every result scores `>= threshold` (threshold clamped into [0, 100])
    /// - No two results share a code; code-field hits take priority
    /// - At most `limit` results, best score first
    pub fn search(
        &self,
        query: &str,
        limit: usize,
        threshold: f64,
        scope: FieldScope,
    ) -> Vec<ScoredResult> {
        let query = fold(query);
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let threshold = clamp_threshold(threshold);

        let mut merger = ResultMerger::new();

        if scope.includes_code() {
            for (idx, score) in scan(&query, self.store.folded_codes(), threshold) {
                merger.merge(self.result(idx, score, MatchedField::Code));
            }
        }

        if scope.includes_name() {
            match self.store.folded_names() {
                Some(names) => {
                    for (idx, score) in scan(&query, names, threshold) {
                        merger.merge(self.result(idx, score, MatchedField::Name));
                    }
                }
                None => debug!("dataset has no name column, name scope contributes nothing"),
            }
        }

        let results = merger.into_ranked(limit);
        debug!(
            query = %query,
            ?scope,
            threshold,
            limit,
            hits = results.len(),
            "fuzzy search"
        );
        results
    }

    /// Code-only search. Callers usually pass `CODE_THRESHOLD`.
    pub fn search_by_code(&self, code: &str, threshold: f64, limit: usize) -> Vec<ScoredResult> {
        self.search(code, limit, threshold, FieldScope::Code)
    }

    /// Name-only search. Callers usually pass `NAME_THRESHOLD`.
    pub fn search_by_name(&self, name: &str, threshold: f64, limit: usize) -> Vec<ScoredResult> {
        self.search(name, limit, threshold, FieldScope::Name)
    }

    /// Filter first, then search the surviving records.
    ///
    /// The filter runs over the whole store before any ranking or truncation,
    /// so a strong match that passes the filters can never be pushed out of
    /// the top `limit` by records the filters would have removed. The
    /// sub-store gets freshly derived indices.
    pub fn search_with_filters(
        &self,
        query: &str,
        filters: &SearchFilters,
        threshold: f64,
        limit: usize,
    ) -> Vec<ScoredResult> {
        let subset = self.store.filtered(filters);
        debug!(
            kept = subset.len(),
            total = self.store.len(),
            ?filters,
            "filtered store"
        );
        SimilarityEngine::new(&subset).search(query, limit, threshold, FieldScope::Both)
    }

    /// Case-insensitive equality lookup on the code.
    ///
    /// Returns the first matching record in store order, scored 100 and
    /// tagged `exact`, or `None` when no code matches.
    pub fn exact_match(&self, code: &str) -> Option<ScoredResult> {
        let wanted = fold(code);
        if wanted.is_empty() {
            return None;
        }

        self.store
            .folded_codes()
            .iter()
            .position(|c| *c == wanted)
            .map(|idx| self.result(idx, MAX_SCORE, MatchedField::Exact))
    }

    /// Autocomplete codes for a partial query.
    ///
    /// Prefix matches come first, in store order. If there are fewer than
    /// `limit` of them, codes whose `partial_ratio` to the query is above 70
    /// are appended best-first. Codes are distinct (case-insensitively) and
    /// returned as stored.
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        let partial = fold(partial);
        if partial.is_empty() || limit == 0 {
            return Vec::new();
        }

        let codes = self.store.folded_codes();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut suggestions = Vec::with_capacity(limit);

        for (idx, code) in codes.iter().enumerate() {
            if code.starts_with(&partial) && seen.insert(code.as_str()) {
                suggestions.push(self.store.records()[idx].code.clone());
                if suggestions.len() == limit {
                    return suggestions;
                }
            }
        }

        let mut fuzzy: Vec<(usize, f64)> = codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(idx, code)| (idx, partial_ratio(&partial, code)))
            .filter(|&(_, score)| score > SUGGEST_MIN_SCORE)
            .collect();
        fuzzy.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        for (idx, _) in fuzzy {
            if seen.insert(codes[idx].as_str()) {
                suggestions.push(self.store.records()[idx].code.clone());
                if suggestions.len() == limit {
                    break;
                }
            }
        }

        suggestions
    }

    fn result(&self, idx: usize, score: f64, field: MatchedField) -> ScoredResult {
        ScoredResult::new(self.store.records()[idx].clone(), score, field)
    }
}

/// Score every candidate, keep those at or above `threshold`, best first.
///
/// Empty candidates (records without a name) are skipped outright so a zero
/// threshold cannot pull them in.
fn scan(query: &str, candidates: &[String], threshold: f64) -> Vec<(usize, f64)> {
    let mut hits: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| !candidate.is_empty())
        .map(|(idx, candidate)| (idx, wratio(query, candidate)))
        .filter(|&(_, score)| passes_threshold(score, threshold))
        .collect();
    hits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    hits
}
