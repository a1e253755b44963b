// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a string for comparison: NFC-compose, trim, and uppercase.
///
/// Catalog text arrives from spreadsheets in mixed normalization forms, so
/// "Gói" typed on one keyboard and "Gói" pasted from a web page can differ
/// by combining marks. Composing first keeps those identical:
/// - " d15 " → "D15"
/// - "gói cước" → "GÓI CƯỚC"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFC normalize (compose base + combining marks)
/// 2. Trim surrounding whitespace
/// 3. Uppercase
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Trim surrounding whitespace
/// 2. Uppercase (assumes input is pre-composed or ASCII)
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value.nfc().collect::<String>().trim().to_uppercase()
}

/// Lightweight folding without the unicode-normalization dependency.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Is this text cell a placeholder for "no value"?
///
/// Spreadsheet exports write missing cells as empty strings, `nan`, `None`
/// or `null`. None of these may ever match a query.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("null")
}

/// Format a number with thousands separators and no decimals: 150000 → "150,000".
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative {
        format!("-{}", out)
    } else {
        out
    }
}
