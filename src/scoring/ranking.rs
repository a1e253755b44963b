// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how result lists get sorted.
//!
//! Higher score first, nothing else. Equal scores keep whatever order the
//! merge produced (code hits before name hits, then store order), but callers
//! must not rely on that: there is no secondary key.

use std::cmp::Ordering;

use crate::types::ScoredResult;

/// Compare two results for ranking: descending by `similarity_score`.
///
/// NaN never occurs in practice (every ratio is finite); if it did, it
/// compares equal so sorting stays total.
pub fn compare_by_score(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.similarity_score
        .partial_cmp(&a.similarity_score)
        .unwrap_or(Ordering::Equal)
}

/// Sort descending by score and keep the first `limit`.
pub fn rank(results: &mut Vec<ScoredResult>, limit: usize) {
    results.sort_by(compare_by_score);
    results.truncate(limit);
}
