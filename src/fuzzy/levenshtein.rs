// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Indel distance: edit distance where a substitution costs two.
//!
//! Only insertions and deletions are allowed, so the distance is
//! `len(a) + len(b) - 2 * lcs(a, b)`. This is the distance behind the
//! normalized ratio: two strings sharing nothing are at distance
//! `len(a) + len(b)`, which normalizes cleanly to a score of 0.
//!
//! The DP keeps a single rolling row and gives up early once every cell in a
//! row exceeds the caller's bound.

/// Indel distance between two char slices.
pub fn indel_distance(a: &[char], b: &[char]) -> usize {
    indel_distance_bounded(a, b, a.len() + b.len()).unwrap_or(a.len() + b.len())
}

/// Indel distance if it is at most `max`, otherwise `None`.
///
/// Two early-exit paths:
/// 1. Length difference is a lower bound on the distance
/// 2. If the minimum value in a DP row exceeds `max`, no later row can recover
pub fn indel_distance_bounded(a: &[char], b: &[char], max: usize) -> Option<usize> {
    let a_len = a.len();
    let b_len = b.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }
    if a_len == 0 || b_len == 0 {
        return Some(a_len + b_len);
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 2 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}

/// Indel distance between two strings, counted in chars rather than bytes.
pub fn indel_distance_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_distance(&a, &b)
}
