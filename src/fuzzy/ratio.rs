// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity ratios, all on a 0-100 scale.
//!
//! - `ratio`: whole-string indel similarity
//! - `partial_ratio`: best alignment of the shorter string inside the longer
//! - `token_sort_ratio` / `token_set_ratio`: word-order-insensitive variants
//! - `partial_token_ratio`: partial alignment over sorted tokens
//! - `wratio`: weighted pick of the above based on the length ratio
//!
//! Package codes are short ("D15") and names are long ("SUPER DATA 15GB"), so
//! no single measure works for both. `wratio` trusts the plain ratio when the
//! lengths are close and leans on partial alignment, discounted, when they
//! are not.

use std::collections::BTreeSet;

use super::levenshtein::indel_distance;

// =============================================================================
// WEIGHTS
// =============================================================================

/// Discount for token-based ratios in `wratio`.
pub const TOKEN_SCALE: f64 = 0.95;

/// Discount for partial ratios when lengths differ by at least 1.5x.
pub const PARTIAL_SCALE: f64 = 0.9;

/// Discount for partial ratios when lengths differ by 8x or more.
pub const PARTIAL_SCALE_LONG: f64 = 0.6;

/// Length ratio below which `wratio` skips partial alignment.
pub const PARTIAL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio at which the long-string discount kicks in.
pub const LONG_LENGTH_RATIO: f64 = 8.0;

// =============================================================================
// BASE RATIOS
// =============================================================================

/// Normalize a distance against the combined length. Two empty strings are identical.
fn normalized(distance: usize, lensum: usize) -> f64 {
    if lensum == 0 {
        return 100.0;
    }
    100.0 * (1.0 - distance as f64 / lensum as f64)
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    normalized(indel_distance(a, b), a.len() + b.len())
}

/// Whole-string similarity: `100 * (1 - indel / (len_a + len_b))`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best `ratio` of the shorter string against any alignment in the longer one.
///
/// Alignments include every full-length window plus the windows that hang
/// off either end, so "BIG" scores 100 against "BIG70 PLUS" and a code that
/// only overlaps the tail of a name still gets credit.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    partial_ratio_chars(&a, &b)
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.len() == b.len() {
        return aligned_ratio(a, b).max(aligned_ratio(b, a));
    }
    if a.len() < b.len() {
        aligned_ratio(a, b)
    } else {
        aligned_ratio(b, a)
    }
}

/// Slide `needle` across `haystack` (which must not be shorter).
fn aligned_ratio(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let h = haystack.len();
    let mut best = 0.0f64;

    // Full windows first: that is where perfect matches live
    for start in 0..=(h - n) {
        best = best.max(ratio_chars(needle, &haystack[start..start + n]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Windows overhanging the start
    for end in 1..n {
        best = best.max(ratio_chars(needle, &haystack[..end]));
    }

    // Windows overhanging the end
    for start in (h - n + 1)..h {
        best = best.max(ratio_chars(needle, &haystack[start..]));
    }

    best
}

// =============================================================================
// TOKEN RATIOS
// =============================================================================

fn sorted_tokens(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

/// Similarity after sorting whitespace-separated tokens.
///
/// "DATA SUPER" and "SUPER DATA" score 100.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Set-based token similarity.
///
/// Compares the shared tokens against each side's leftovers. If one side's
/// tokens are a subset of the other's, the score is 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab: Vec<char> = diff_ab.join(" ").chars().collect();
    let diff_ba: Vec<char> = diff_ba.join(" ").chars().collect();
    let sect_len = intersection.join(" ").chars().count();
    let separator = usize::from(sect_len > 0);

    // Lengths of "sect diff_ab" and "sect diff_ba"
    let sect_ab_len = sect_len + separator + diff_ab.len();
    let sect_ba_len = sect_len + separator + diff_ba.len();

    // The shared prefix cancels out, so only the leftovers contribute distance
    let distance = indel_distance(&diff_ab, &diff_ba);
    let result = normalized(distance, sect_ab_len + sect_ba_len);
    if sect_len == 0 {
        return result;
    }

    // "sect" against "sect diff_xx" differs by exactly the appended part
    let sect_ab = normalized(separator + diff_ab.len(), sect_len + sect_ab_len);
    let sect_ba = normalized(separator + diff_ba.len(), sect_len + sect_ba_len);

    result.max(sect_ab).max(sect_ba)
}

/// Best of `token_sort_ratio` and `token_set_ratio`.
pub fn token_ratio(a: &str, b: &str) -> f64 {
    token_sort_ratio(a, b).max(token_set_ratio(a, b))
}

/// Partial alignment over sorted tokens.
///
/// Any shared token scores 100. Otherwise the sorted token strings are
/// aligned with `partial_ratio`, and again with duplicates removed.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let split_a = sorted_tokens(a);
    let split_b = sorted_tokens(b);
    let tokens_a: BTreeSet<&str> = split_a.iter().copied().collect();
    let tokens_b: BTreeSet<&str> = split_b.iter().copied().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    if !tokens_a.is_disjoint(&tokens_b) {
        return 100.0;
    }

    let result = partial_ratio(&split_a.join(" "), &split_b.join(" "));
    if split_a.len() == tokens_a.len() && split_b.len() == tokens_b.len() {
        return result;
    }

    let dedup_a: Vec<&str> = tokens_a.into_iter().collect();
    let dedup_b: Vec<&str> = tokens_b.into_iter().collect();
    result.max(partial_ratio(&dedup_a.join(" "), &dedup_b.join(" ")))
}

// =============================================================================
// WEIGHTED RATIO
// =============================================================================

/// Weighted ratio: the best-suited measure for this pair of strings.
///
/// - Length ratio < 1.5: `max(ratio, token_ratio × 0.95)`
/// - Otherwise: also `partial_ratio × scale` and
///   `partial_token_ratio × 0.95 × scale`, where scale is 0.9, or 0.6 once
///   one string is 8x longer than the other
///
/// Returns 0 if either string is empty.
pub fn wratio(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let len_ratio = a_len.max(b_len) as f64 / a_len.min(b_len) as f64;
    let mut best = ratio(a, b);

    if len_ratio < PARTIAL_LENGTH_RATIO {
        return best.max(token_ratio(a, b) * TOKEN_SCALE);
    }

    let partial_scale = if len_ratio < LONG_LENGTH_RATIO {
        PARTIAL_SCALE
    } else {
        PARTIAL_SCALE_LONG
    };

    best = best.max(partial_ratio(a, b) * partial_scale);
    best.max(partial_token_ratio(a, b) * TOKEN_SCALE * partial_scale)
}
