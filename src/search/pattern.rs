// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pattern engine: regular-expression scans over record fields.
//!
//! Relevance is binary. A record either matches (score 100) or it does not,
//! so there is nothing to rank; results come back in store order and the
//! scan stops as soon as `limit` records have matched. Which records make the
//! cut therefore depends on the store's load order, which `RecordStore`
//! preserves.
//!
//! The pattern is compiled once, up front. Compilation is the only thing that
//! can fail; the scan itself cannot.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::scoring::MAX_SCORE;
use crate::search::dedup::ResultMerger;
use crate::store::RecordStore;
use crate::types::{RegexScope, ScoredResult};

/// Regex search over a borrowed record store.
#[derive(Debug, Clone, Copy)]
pub struct PatternEngine<'s> {
    store: &'s RecordStore,
}

impl<'s> PatternEngine<'s> {
    pub fn new(store: &'s RecordStore) -> Self {
        Self { store }
    }

    /// Records whose scoped fields match `pattern`, in store order.
    ///
    /// Fields are tested in priority order (code, name, description, full
    /// description) and the first field that matches is recorded as
    /// `matched_field`. Absent and placeholder values are never tested.
    ///
    /// A blank pattern yields `Ok` with no results. A pattern that fails to
    /// compile yields `Err(SearchError::InvalidPattern)`, even when `limit`
    /// is zero, so callers can always tell a rejected pattern apart from an
    /// empty result.
    pub fn search_regex(
        &self,
        pattern: &str,
        scope: RegexScope,
        case_sensitive: bool,
        limit: usize,
    ) -> Result<Vec<ScoredResult>, SearchError> {
        if pattern.trim().is_empty() {
            return Ok(Vec::new());
        }

        let regex = compile_pattern(pattern, case_sensitive)?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut merger = ResultMerger::with_capacity(limit.min(self.store.len()));

        for record in self.store.iter() {
            let hit = scope
                .fields()
                .iter()
                .find(|&&field| record.text(field).is_some_and(|text| regex.is_match(text)));

            if let Some(field) = hit {
                merger.merge(ScoredResult::new(
                    record.clone(),
                    MAX_SCORE,
                    field.matched_field(),
                ));
                if merger.len() >= limit {
                    break;
                }
            }
        }

        debug!(
            pattern,
            ?scope,
            case_sensitive,
            limit,
            hits = merger.len(),
            "regex search"
        );
        Ok(merger.into_unranked())
    }
}

/// Compile a user pattern, case-insensitive unless `case_sensitive`.
///
/// Matching is unanchored: `BIG` finds "XBIG70". Use `^` and `$` to anchor.
pub fn compile_pattern(pattern: &str, case_sensitive: bool) -> Result<Regex, SearchError> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| {
            warn!(pattern, error = %e, "rejected regex pattern");
            SearchError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })
}
