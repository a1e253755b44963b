// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! A `Record` is one service package. The loader hands us clean, flat rows:
//! numeric columns already coerced, text columns defaulting to empty, and a
//! `code` on every row. Everything the engines need is modeled as a typed
//! field; every other column rides along untouched in `extra`.
//!
//! # Invariants
//!
//! - **Record**: `code` is always present. It is not guaranteed unique.
//! - **ScoredResult**: `0 ≤ similarity_score ≤ 100`. Regex hits are always 100.
//! - **Result lists**: no two results share a folded `code`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ParseScopeError;
use crate::utils::is_placeholder;

// =============================================================================
// RECORDS
// =============================================================================

/// One catalog entry (a service package).
///
/// Field names follow the cleaned dataset. `package_code`/`package_name` are
/// accepted as aliases because that is what the unified CSV export calls them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Short identifier, e.g. "D15". Not guaranteed globally unique.
    #[serde(alias = "package_code")]
    pub code: String,

    /// Free-text display name. Absent in some source schemas.
    #[serde(default, alias = "package_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Extended description scraped from the package detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,

    /// Distribution channel the package was scraped from (myvnpt, vinaphone, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Price in VND.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_gb: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_days: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_count: Option<f64>,

    /// Every other column, opaque to the engines.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Record {
    /// A record with just a code; everything else absent.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            description: None,
            full_description: None,
            source: None,
            price: None,
            data_gb: None,
            cycle_days: None,
            sms_count: None,
            extra: BTreeMap::new(),
        }
    }

    /// Text of a searchable field, or `None` when absent or a placeholder.
    ///
    /// The code is an identifier, so only an empty code counts as absent;
    /// a code spelled "NULL" is still that package's code.
    pub fn text(&self, field: TextField) -> Option<&str> {
        let value = match field {
            TextField::Code => {
                return Some(self.code.as_str()).filter(|c| !c.trim().is_empty());
            }
            TextField::Name => self.name.as_deref(),
            TextField::Description => self.description.as_deref(),
            TextField::FullDescription => self.full_description.as_deref(),
        };
        value.filter(|v| !is_placeholder(v))
    }
}

// =============================================================================
// FIELDS AND SCOPES
// =============================================================================

/// The text fields a query can examine, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Code,
    Name,
    Description,
    FullDescription,
}

impl TextField {
    /// Provenance tag recorded when this field produces a hit.
    pub fn matched_field(self) -> MatchedField {
        match self {
            TextField::Code => MatchedField::Code,
            TextField::Name => MatchedField::Name,
            TextField::Description => MatchedField::Description,
            TextField::FullDescription => MatchedField::FullDescription,
        }
    }
}

/// Which fields a fuzzy query may examine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldScope {
    Code,
    Name,
    #[default]
    Both,
}

impl FieldScope {
    pub fn includes_code(self) -> bool {
        matches!(self, FieldScope::Code | FieldScope::Both)
    }

    pub fn includes_name(self) -> bool {
        matches!(self, FieldScope::Name | FieldScope::Both)
    }
}

impl FromStr for FieldScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(FieldScope::Code),
            "name" => Ok(FieldScope::Name),
            "both" => Ok(FieldScope::Both),
            other => Err(ParseScopeError {
                value: other.to_string(),
                expected: "code, name, both",
            }),
        }
    }
}

/// Which fields a regex query may examine.
///
/// `FullDescription` is only reachable through `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegexScope {
    Code,
    Name,
    #[default]
    Both,
    Description,
    All,
}

impl RegexScope {
    /// Fields to test, in priority order. The first hit wins.
    pub fn fields(self) -> &'static [TextField] {
        match self {
            RegexScope::Code => &[TextField::Code],
            RegexScope::Name => &[TextField::Name],
            RegexScope::Both => &[TextField::Code, TextField::Name],
            RegexScope::Description => &[TextField::Description],
            RegexScope::All => &[
                TextField::Code,
                TextField::Name,
                TextField::Description,
                TextField::FullDescription,
            ],
        }
    }
}

impl FromStr for RegexScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(RegexScope::Code),
            "name" => Ok(RegexScope::Name),
            "both" => Ok(RegexScope::Both),
            "description" => Ok(RegexScope::Description),
            "all" => Ok(RegexScope::All),
            other => Err(ParseScopeError {
                value: other.to_string(),
                expected: "code, name, both, description, all",
            }),
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Which field caused a record to be included in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    Code,
    Name,
    Description,
    FullDescription,
    /// Case-insensitive equality lookup on the code.
    Exact,
}

impl MatchedField {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::Code => "code",
            MatchedField::Name => "name",
            MatchedField::Description => "description",
            MatchedField::FullDescription => "full_description",
            MatchedField::Exact => "exact",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record plus the two provenance fields attached by a query.
///
/// Serializes flat: the record's columns followed by `similarity_score` and
/// `matched_field`, which is the shape report writers consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: Arc<Record>,
    pub similarity_score: f64,
    pub matched_field: MatchedField,
}

impl ScoredResult {
    pub fn new(record: Arc<Record>, similarity_score: f64, matched_field: MatchedField) -> Self {
        Self {
            record,
            similarity_score,
            matched_field,
        }
    }

    pub fn code(&self) -> &str {
        &self.record.code
    }
}
