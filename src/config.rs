// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search defaults, optionally loaded from a JSON file.
//!
//! ```json
//! { "threshold": 65, "limit": 20 }
//! ```
//!
//! Missing keys take the built-in defaults. Command-line flags override
//! whatever the file says.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::{
    CODE_THRESHOLD, DEFAULT_LIMIT, DEFAULT_REGEX_LIMIT, DEFAULT_SUGGEST_LIMIT, DEFAULT_THRESHOLD,
    MAX_SCORE, MIN_SCORE, NAME_THRESHOLD,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Minimum score for `search` and `search_with_filters`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_code_threshold")]
    pub code_threshold: f64,

    #[serde(default = "default_name_threshold")]
    pub name_threshold: f64,

    /// Maximum results for fuzzy search.
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_regex_limit")]
    pub regex_limit: usize,

    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
}

impl SearchConfig {
    /// Load a JSON configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse JSON configuration from a string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("threshold", self.threshold),
            ("code_threshold", self.code_threshold),
            ("name_threshold", self.name_threshold),
        ] {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{} must be between {} and {}, got {}",
                    key, MIN_SCORE, MAX_SCORE, value
                )));
            }
        }

        for (key, value) in [
            ("limit", self.limit),
            ("regex_limit", self.regex_limit),
            ("suggest_limit", self.suggest_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{} must be > 0", key)));
            }
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            code_threshold: CODE_THRESHOLD,
            name_threshold: NAME_THRESHOLD,
            limit: DEFAULT_LIMIT,
            regex_limit: DEFAULT_REGEX_LIMIT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_code_threshold() -> f64 {
    CODE_THRESHOLD
}
fn default_name_threshold() -> f64 {
    NAME_THRESHOLD
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_regex_limit() -> usize {
    DEFAULT_REGEX_LIMIT
}
fn default_suggest_limit() -> usize {
    DEFAULT_SUGGEST_LIMIT
}
