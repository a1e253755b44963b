// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Descriptive statistics over a set of packages.
//!
//! Used both for the whole catalog (`stats` command) and for a result list
//! (summary report). Attributes no record carries are reported as `None`,
//! never as zero.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Record;

/// Min / max / mean / median of one numeric attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl NumericSummary {
    /// Summarize the finite values; `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        Some(Self {
            count,
            min: values[0],
            max: values[count - 1],
            mean: values.iter().sum::<f64>() / count as f64,
            median,
        })
    }
}

/// Counts and attribute ranges for a set of packages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    /// Packages per source channel. Records without a source are not counted.
    pub sources: BTreeMap<String, usize>,
    pub price: Option<NumericSummary>,
    pub data_gb: Option<NumericSummary>,
    pub cycle_days: Option<NumericSummary>,
}

impl CatalogStats {
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let records: Vec<&Record> = records.into_iter().collect();

        let mut sources = BTreeMap::new();
        for source in records.iter().filter_map(|r| r.source.as_deref()) {
            let source = source.trim();
            if !source.is_empty() {
                *sources.entry(source.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            total: records.len(),
            sources,
            price: NumericSummary::from_values(records.iter().filter_map(|r| r.price)),
            data_gb: NumericSummary::from_values(records.iter().filter_map(|r| r.data_gb)),
            cycle_days: NumericSummary::from_values(records.iter().filter_map(|r| r.cycle_days)),
        }
    }

    /// Sources ordered by package count, largest first; ties by name.
    pub fn sources_by_count(&self) -> Vec<(&str, usize)> {
        let mut sources: Vec<(&str, usize)> = self
            .sources
            .iter()
            .map(|(source, count)| (source.as_str(), *count))
            .collect();
        sources.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sources
    }
}
