// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score constants and threshold handling.
//!
//! # Constants
//!
//! | Name                    | Value | Used by                               |
//! |-------------------------|-------|---------------------------------------|
//! | `MAX_SCORE`             | 100.0 | Regex and exact hits (binary)         |
//! | `DEFAULT_THRESHOLD`     | 60.0  | `search`, `search_with_filters`       |
//! | `CODE_THRESHOLD`        | 80.0  | `search_by_code`                      |
//! | `NAME_THRESHOLD`        | 70.0  | `search_by_name`                      |
//! | `SUGGEST_MIN_SCORE`     | 70.0  | `suggest` fuzzy fallback (exclusive)  |

/// Lowest possible similarity score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible similarity score. Regex and exact hits always get this.
pub const MAX_SCORE: f64 = 100.0;

/// Default minimum score for general fuzzy search.
pub const DEFAULT_THRESHOLD: f64 = 60.0;

/// Default minimum score for code-only search. Codes are short, so a single
/// edit moves the score a lot; the bar is higher.
pub const CODE_THRESHOLD: f64 = 80.0;

/// Default minimum score for name-only search.
pub const NAME_THRESHOLD: f64 = 70.0;

/// Fuzzy suggestions must score strictly above this.
pub const SUGGEST_MIN_SCORE: f64 = 70.0;

/// Default number of results for fuzzy search.
pub const DEFAULT_LIMIT: usize = 10;

/// Default number of results for regex search.
pub const DEFAULT_REGEX_LIMIT: usize = 100;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGEST_LIMIT: usize = 5;

/// Bring a caller-supplied threshold into `[0, 100]`.
///
/// NaN falls back to `DEFAULT_THRESHOLD` rather than silently rejecting
/// every candidate (`score >= NaN` is always false).
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        return DEFAULT_THRESHOLD;
    }
    threshold.clamp(MIN_SCORE, MAX_SCORE)
}

/// Does `score` clear `threshold`? Equality keeps the candidate.
#[inline]
pub fn passes_threshold(score: f64, threshold: f64) -> bool {
    score >= threshold
}
