// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search engines: where queries meet the record store.
//!
//! Two engines over the same store. The similarity engine grades records by
//! weighted-ratio similarity on code and name; the pattern engine selects
//! records whose fields match a regular expression. Both borrow the store,
//! never mutate it, and return owned result lists that outlive the query.

pub mod dedup;
pub mod filters;
pub mod pattern;
pub mod similarity;

pub use dedup::ResultMerger;
pub use filters::SearchFilters;
pub use pattern::{compile_pattern, PatternEngine};
pub use similarity::SimilarityEngine;
