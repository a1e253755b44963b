// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy and pattern search over a telecom package catalog.
//!
//! Given a snapshot of service packages (short codes like "D15", free-text
//! names, descriptions, prices), find the packages a user meant: by
//! approximate similarity to what they typed, or by a regular expression.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │  catalog/    │────▶│  store.rs    │────▶│  search/           │
//! │ (JSON / CSV, │     │ (RecordStore,│     │  similarity.rs     │
//! │  stats)      │     │ folded codes │     │  pattern.rs        │
//! └──────────────┘     │ and names)   │     │  dedup.rs          │
//!                      └──────────────┘     └─────────┬──────────┘
//!                                                     │
//!        ┌───────────────────┐      ┌─────────────────▼──┐
//!        │  fuzzy/           │◀─────│  scoring/          │
//!        │ (indel distance,  │      │ (thresholds, rank) │
//!        │  wratio family)   │      └────────────────────┘
//!        └───────────────────┘
//! ```
//!
//! Result lists flow out to `report` (JSON and CSV export, text summary) or
//! the CLI.
//!
//! # Guarantees
//!
//! | Property            | Holds for                                  |
//! |---------------------|--------------------------------------------|
//! | score ≥ threshold   | every fuzzy result                          |
//! | score = 100         | every regex and exact result                |
//! | ≤ limit results     | every query                                 |
//! | unique codes        | every result list (case-insensitive)        |
//! | code hit wins       | a package matching on code and name         |
//! | deterministic       | same store + same query = same result list  |
//!
//! # Usage
//!
//! ```ignore
//! use pkgfind::{Catalog, FieldScope, RegexScope, DEFAULT_THRESHOLD};
//!
//! let catalog = Catalog::open("packages.json")?;
//! let fuzzy = catalog.search("d15", 10, DEFAULT_THRESHOLD, FieldScope::Both);
//! let regex = catalog.search_regex("^BIG", RegexScope::Code, false, 100)?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod report;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;
pub mod utils;

// Re-exports for public API
pub use catalog::{
    load_catalog, load_records, load_records_csv, Catalog, CatalogStats, NumericSummary,
};
pub use config::SearchConfig;
pub use error::{CatalogError, ConfigError, ParseScopeError, ReportError, SearchError};
pub use fuzzy::{partial_ratio, ratio, wratio};
pub use report::{export_csv, export_json, summary_report, write_summary};
pub use scoring::{
    CODE_THRESHOLD, DEFAULT_LIMIT, DEFAULT_REGEX_LIMIT, DEFAULT_SUGGEST_LIMIT, DEFAULT_THRESHOLD,
    NAME_THRESHOLD,
};
pub use search::{PatternEngine, ResultMerger, SearchFilters, SimilarityEngine};
pub use store::RecordStore;
pub use types::{FieldScope, MatchedField, Record, RegexScope, ScoredResult, TextField};
pub use utils::fold;
