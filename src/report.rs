// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Report output for result lists.
//!
//! Reports consume exactly what a query returns. The JSON and CSV exports can
//! keep or strip the two provenance fields (`similarity_score`,
//! `matched_field`); the text summary never shows them.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::catalog::{CatalogStats, NumericSummary};
use crate::error::ReportError;
use crate::types::{Record, ScoredResult};
use crate::utils::format_thousands;

/// Number of entries in each "top N" section of the summary.
const TOP_N: usize = 10;

/// Record columns in CSV order. Extra columns follow, sorted by name.
const CSV_COLUMNS: &[&str] = &[
    "code",
    "name",
    "description",
    "full_description",
    "source",
    "price",
    "data_gb",
    "cycle_days",
    "sms_count",
];

const PROVENANCE_COLUMNS: &[&str] = &["similarity_score", "matched_field"];

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 40;

/// Write `results` to `path` as a pretty-printed JSON array.
///
/// With `include_internal == false` each entry is the bare record, exactly as
/// it was loaded.
pub fn export_json(
    results: &[ScoredResult],
    path: impl AsRef<Path>,
    include_internal: bool,
) -> Result<(), ReportError> {
    if results.is_empty() {
        return Err(ReportError::Empty);
    }

    let path = path.as_ref();
    let mut writer = BufWriter::new(create(path)?);
    if include_internal {
        serde_json::to_writer_pretty(&mut writer, results)?;
    } else {
        let records: Vec<&Record> = results.iter().map(|r| r.record.as_ref()).collect();
        serde_json::to_writer_pretty(&mut writer, &records)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), packages = results.len(), "exported json report");
    Ok(())
}

/// Write `results` to `path` as CSV with a header row.
///
/// Columns are the union over all results: known record fields first, then
/// extra columns by name, then the provenance fields when `include_internal`.
/// Absent values are blank cells.
pub fn export_csv(
    results: &[ScoredResult],
    path: impl AsRef<Path>,
    include_internal: bool,
) -> Result<(), ReportError> {
    if results.is_empty() {
        return Err(ReportError::Empty);
    }

    let rows = results
        .iter()
        .map(|r| {
            serde_json::to_value(r).map(|value| match value {
                serde_json::Value::Object(map) => map,
                _ => serde_json::Map::new(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let present: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys())
        .map(String::as_str)
        .collect();
    let mut columns: Vec<&str> = CSV_COLUMNS
        .iter()
        .copied()
        .filter(|c| present.contains(c))
        .collect();
    columns.extend(
        present
            .iter()
            .copied()
            .filter(|c| !CSV_COLUMNS.contains(c) && !PROVENANCE_COLUMNS.contains(c)),
    );
    if include_internal {
        columns.extend_from_slice(PROVENANCE_COLUMNS);
    }

    let path = path.as_ref();
    let mut writer = csv::Writer::from_writer(create(path)?);
    writer.write_record(&columns)?;
    for row in &rows {
        writer.write_record(columns.iter().map(|c| csv_cell(row.get(*c))))?;
    }
    writer.flush()?;

    info!(path = %path.display(), packages = results.len(), "exported csv report");
    Ok(())
}

fn csv_cell(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Plain-text summary: count, source distribution, price and data
/// statistics, and the top packages by price and by data volume.
pub fn summary_report(results: &[ScoredResult]) -> Result<String, ReportError> {
    if results.is_empty() {
        return Err(ReportError::Empty);
    }

    let records: Vec<&Record> = results.iter().map(|r| r.record.as_ref()).collect();
    let stats = CatalogStats::compute(records.iter().copied());

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary_body(&mut out, &records, &stats);
    Ok(out)
}

/// Render the summary and write it to `path`.
pub fn write_summary(results: &[ScoredResult], path: impl AsRef<Path>) -> Result<(), ReportError> {
    let summary = summary_report(results)?;
    let path = path.as_ref();
    let mut file = create(path)?;
    file.write_all(summary.as_bytes())?;

    info!(path = %path.display(), packages = results.len(), "wrote summary report");
    Ok(())
}

fn create(path: &Path) -> Result<File, ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

fn write_summary_body(
    out: &mut String,
    records: &[&Record],
    stats: &CatalogStats,
) -> std::fmt::Result {
    writeln!(out, "{}", "=".repeat(RULE_WIDE))?;
    writeln!(out, "PACKAGE SUMMARY REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDE))?;
    writeln!(out)?;
    writeln!(out, "Total packages: {}", stats.total)?;
    writeln!(out)?;

    section(out, "By source")?;
    for (source, count) in stats.sources_by_count() {
        let share = count as f64 / stats.total as f64 * 100.0;
        writeln!(out, "  {}: {} packages ({:.1}%)", source, count, share)?;
    }
    writeln!(out)?;

    if let Some(price) = &stats.price {
        section(out, "Price")?;
        write_numeric(out, price, |v| format!("{} VND", format_thousands(v)), true)?;
        writeln!(out)?;
    }

    if let Some(data) = &stats.data_gb {
        section(out, "Data")?;
        write_numeric(out, data, |v| format!("{:.2} GB", v), false)?;
        writeln!(out)?;
    }

    let by_price = top_by(records, |r| r.price);
    if !by_price.is_empty() {
        section(out, &format!("Top {} by price", TOP_N))?;
        for (rank, (record, price)) in by_price.iter().enumerate() {
            writeln!(out, "  {}. {}: {} VND", rank + 1, record.code, format_thousands(*price))?;
        }
        writeln!(out)?;
    }

    let by_data = top_by(records, |r| r.data_gb);
    if !by_data.is_empty() {
        section(out, &format!("Top {} by data", TOP_N))?;
        for (rank, (record, data)) in by_data.iter().enumerate() {
            writeln!(out, "  {}. {}: {:.2} GB", rank + 1, record.code, data)?;
        }
    }

    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{}:", title)?;
    writeln!(out, "{}", "-".repeat(RULE_NARROW))
}

fn write_numeric(
    out: &mut String,
    summary: &NumericSummary,
    fmt: impl Fn(f64) -> String,
    with_median: bool,
) -> std::fmt::Result {
    writeln!(out, "  Min: {}", fmt(summary.min))?;
    writeln!(out, "  Max: {}", fmt(summary.max))?;
    writeln!(out, "  Mean: {}", fmt(summary.mean))?;
    if with_median {
        writeln!(out, "  Median: {}", fmt(summary.median))?;
    }
    Ok(())
}

/// Records carrying `key`, largest first, at most `TOP_N`. Ties keep input order.
fn top_by<'a>(
    records: &[&'a Record],
    key: impl Fn(&Record) -> Option<f64>,
) -> Vec<(&'a Record, f64)> {
    let mut keyed: Vec<(&'a Record, f64)> = records
        .iter()
        .filter_map(|&r| key(r).filter(|v| v.is_finite()).map(|v| (r, v)))
        .collect();
    keyed.sort_by(|a, b| b.1.total_cmp(&a.1));
    keyed.truncate(TOP_N);
    keyed
}
