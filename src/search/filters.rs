// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Attribute-range filters applied before fuzzy search.
//!
//! Bounds are inclusive, an absent bound is unbounded, and a record with no
//! value for a bounded attribute is excluded. Source comparison ignores case.

use serde::{Deserialize, Serialize};

use crate::types::Record;

/// Predicate filters over source, price and data volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub min_data: Option<f64>,
    #[serde(default)]
    pub max_data: Option<f64>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_data_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_data = min;
        self.max_data = max;
        self
    }

    /// True when no filter is set (an empty source string counts as unset).
    pub fn is_empty(&self) -> bool {
        self.active_source().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_data.is_none()
            && self.max_data.is_none()
    }

    fn active_source(&self) -> Option<&str> {
        self.source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Does `record` pass every filter?
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(wanted) = self.active_source() {
            let same = record
                .source
                .as_deref()
                .is_some_and(|s| s.trim().to_lowercase() == wanted.to_lowercase());
            if !same {
                return false;
            }
        }

        within(record.price, self.min_price, self.max_price)
            && within(record.data_gb, self.min_data, self.max_data)
    }
}

fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}
