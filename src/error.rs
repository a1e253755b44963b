// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Queries have exactly one failure mode: a regex that does not compile.
//! "Nothing entered" and "nothing matched" are not errors; they are empty
//! result lists. Everything else here belongs to the edges (loading a
//! dataset, reading config, writing reports).

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The regular expression was rejected at compile time.
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Failure to load a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read csv catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {index} has an empty code")]
    MissingCode { index: usize },
}

/// Failure to load or validate a search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Failure to export a result list.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no packages to export")]
    Empty,

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write csv report: {0}")]
    Csv(#[from] csv::Error),
}

/// Unrecognized field scope name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scope '{value}' (expected one of: {expected})")]
pub struct ParseScopeError {
    pub value: String,
    pub expected: &'static str,
}
