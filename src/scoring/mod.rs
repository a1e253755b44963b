// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: where result scores come from and how they sort.
//!
//! Fuzzy scores are graded 0-100 by the weighted ratio. Regex and exact hits
//! are binary and always score 100. Ranking is by score alone; there is no
//! secondary key.

mod core;
pub mod ranking;

pub use core::*;
