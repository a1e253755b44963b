// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: approximate string similarity on a 0-100 scale.
//!
//! Two layers here: an indel edit distance over char slices, and the family of
//! normalized ratios built on it (plain, partial, token-based, and the
//! weighted ratio that picks the best of them for the input's shape).

mod levenshtein;
mod ratio;

pub use levenshtein::*;
pub use ratio::*;
