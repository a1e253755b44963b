//! Exporting result lists.

use std::fs;

use crate::common::sample_facade;
use pkgfind::{
    export_csv, export_json, load_records_csv, summary_report, write_summary, FieldScope,
    ReportError, RegexScope,
};
use tempfile::tempdir;

#[test]
fn test_export_search_results_without_scores() {
    let catalog = sample_facade();
    let results = catalog.search("data", 5, 50.0, FieldScope::Both);
    assert!(!results.is_empty());

    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");
    export_json(&results, &path, false).unwrap();

    let exported: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(exported.len(), results.len());
    for (row, result) in exported.iter().zip(&results) {
        assert_eq!(row["code"], result.code());
        assert!(row.get("similarity_score").is_none());
        assert!(row.get("matched_field").is_none());
    }
}

#[test]
fn test_export_regex_results_with_scores() {
    let catalog = sample_facade();
    let results = catalog
        .search_regex("^BIG", RegexScope::Code, false, 10)
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("regex.json");
    export_json(&results, &path, true).unwrap();

    let exported: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(exported
        .iter()
        .all(|row| row["similarity_score"] == 100.0 && row["matched_field"] == "code"));
}

#[test]
fn test_summary_for_search_results() {
    let catalog = sample_facade();
    let results = catalog.search_regex("data", RegexScope::Name, false, 100).unwrap();
    let summary = summary_report(&results).unwrap();

    assert!(summary.contains(&format!("Total packages: {}", results.len())));
    assert!(summary.contains("By source:"));
    assert!(summary.contains("Top 10 by price:"));
}

#[test]
fn test_write_summary_creates_parent_dirs() {
    let catalog = sample_facade();
    let results = catalog.search("big", 10, 0.0, FieldScope::Both);

    let dir = tempdir().unwrap();
    let path = dir.path().join("reports").join("summary.txt");
    write_summary(&results, &path).unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("PACKAGE SUMMARY REPORT"));
}

#[test]
fn test_nothing_to_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");

    assert!(matches!(export_json(&[], &path, false), Err(ReportError::Empty)));
    assert!(!path.exists());
    assert!(matches!(write_summary(&[], &path), Err(ReportError::Empty)));
}

#[test]
fn test_csv_export_reloads_as_catalog() {
    let catalog = sample_facade();
    let results = catalog.search("data", 5, 50.0, FieldScope::Both);
    assert!(!results.is_empty());

    let dir = tempdir().unwrap();
    let path = dir.path().join("exports").join("results.csv");
    export_csv(&results, &path, true).unwrap();

    let reloaded = load_records_csv(&path).unwrap();
    assert_eq!(reloaded.len(), results.len());
    for (record, result) in reloaded.iter().zip(&results) {
        assert_eq!(record.code, result.code());
        assert_eq!(record.price, result.record.price);
        assert_eq!(
            record.extra["matched_field"],
            serde_json::to_value(result.matched_field).unwrap()
        );
    }
}
