// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset loading.
//!
//! A catalog snapshot is either a JSON array of flat package objects or the
//! cleaned CSV export with one package per row. Loading is the last place a
//! dataset can be rejected; once a `RecordStore` exists every query over it
//! is infallible (regex compilation aside).

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number, Value};
use tracing::info;

use crate::error::CatalogError;
use crate::types::Record;

/// CSV columns read as numbers. A cell that does not parse is treated as absent.
const NUMERIC_COLUMNS: &[&str] = &["price", "data_gb", "cycle_days", "sms_count"];

/// CSV columns kept even when blank, so a blank code fails the load.
const CODE_COLUMNS: &[&str] = &["code", "package_code"];

/// Load a snapshot, picking the format from the file extension.
///
/// `.csv` (any case) is read as CSV; everything else as JSON.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Record>, CatalogError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_records_csv(path)
    } else {
        load_records(path)
    }
}

/// Read and clean a JSON catalog snapshot from `path`.
///
/// Rows keep their file order. `code` and `name` are trimmed; a row whose
/// code is empty after trimming fails the whole load.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content)?;
    info!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(records)
}

/// Parse and clean a JSON catalog snapshot already in memory.
pub fn parse_records(json: &str) -> Result<Vec<Record>, CatalogError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    finish(records)
}

/// Read and clean a CSV catalog from `path`, with the same rules as
/// [`load_records`].
pub fn load_records_csv(path: impl AsRef<Path>) -> Result<Vec<Record>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records_csv(file)?;
    info!(path = %path.display(), records = records.len(), "loaded csv catalog");
    Ok(records)
}

/// Parse a CSV catalog with a header row.
///
/// Headers name the record fields (`package_code`/`package_name` work too);
/// unknown columns land in `extra` as strings. Blank cells are absent values.
pub fn parse_records_csv(reader: impl Read) -> Result<Vec<Record>, CatalogError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut records: Vec<Record> = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut fields = Map::with_capacity(headers.len());
        for (header, cell) in headers.iter().zip(row.iter()) {
            if let Some(value) = cell_value(header, cell) {
                fields.insert(header.clone(), value);
            }
        }
        records.push(serde_json::from_value(Value::Object(fields))?);
    }

    finish(records)
}

fn cell_value(header: &str, cell: &str) -> Option<Value> {
    if CODE_COLUMNS.contains(&header) {
        return Some(Value::String(cell.to_string()));
    }
    if cell.trim().is_empty() {
        return None;
    }
    if NUMERIC_COLUMNS.contains(&header) {
        return cell
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number);
    }
    Some(Value::String(cell.to_string()))
}

fn finish(mut records: Vec<Record>) -> Result<Vec<Record>, CatalogError> {
    for (index, record) in records.iter_mut().enumerate() {
        clean(record);
        if record.code.is_empty() {
            return Err(CatalogError::MissingCode { index });
        }
    }
    Ok(records)
}

fn clean(record: &mut Record) {
    let code = record.code.trim();
    if code.len() != record.code.len() {
        record.code = code.to_string();
    }
    if let Some(name) = record.name.as_mut() {
        let trimmed = name.trim();
        if trimmed.len() != name.len() {
            *name = trimmed.to_string();
        }
    }
}
