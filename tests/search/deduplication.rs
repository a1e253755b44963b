//! One result per package code.

use std::sync::Arc;

use crate::common::{assert_unique_codes, codes, make_record, make_record_with_name};
use pkgfind::{
    FieldScope, MatchedField, PatternEngine, RecordStore, RegexScope, ResultMerger, ScoredResult,
    SimilarityEngine,
};

fn duplicated_store() -> RecordStore {
    RecordStore::new(vec![
        make_record_with_name("D15", "Data 15 vnpt"),
        make_record_with_name("D15", "Data 15 vinaphone"),
        make_record_with_name("d15", "Data 15 myvnpt"),
        make_record_with_name("D10", "Data 10"),
    ])
}

#[test]
fn test_fuzzy_search_collapses_repeated_codes() {
    let store = duplicated_store();
    let results = SimilarityEngine::new(&store).search("D15", 10, 0.0, FieldScope::Both);

    assert_unique_codes(&results);
    assert_eq!(codes(&results), vec!["D15", "D10"]);
}

#[test]
fn test_repeated_code_reported_with_one_of_its_records() {
    let store = duplicated_store();
    let results = SimilarityEngine::new(&store).search("D15", 10, 0.0, FieldScope::Code);

    assert_eq!(results[0].similarity_score, 100.0);
    let name = results[0].record.name.as_deref().unwrap();
    assert!(name.starts_with("Data 15"), "unexpected record {}", name);
}

#[test]
fn test_regex_search_collapses_repeated_codes() {
    let store = duplicated_store();
    let results = PatternEngine::new(&store)
        .search_regex("^d1", RegexScope::Code, false, 10)
        .unwrap();

    assert_eq!(codes(&results), vec!["D15", "D10"]);
}

#[test]
fn test_regex_limit_counts_unique_packages() {
    let store = duplicated_store();
    let results = PatternEngine::new(&store)
        .search_regex("^d1", RegexScope::Code, false, 2)
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_unique_codes(&results);
}

#[test]
fn test_name_hit_never_replaces_code_hit() {
    let store = RecordStore::new(vec![make_record_with_name("DATA1", "DATA")]);
    let results = SimilarityEngine::new(&store).search("DATA", 10, 0.0, FieldScope::Both);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_field, MatchedField::Code);
    assert!(results[0].similarity_score < 100.0);
}

#[test]
fn test_merger_first_seen_wins() {
    let record = Arc::new(make_record("A1"));
    let mut merger = ResultMerger::new();

    assert!(merger.merge(ScoredResult::new(record.clone(), 70.0, MatchedField::Code)));
    assert!(!merger.merge(ScoredResult::new(record, 99.0, MatchedField::Name)));

    let results = merger.into_ranked(10);
    assert_eq!(results[0].similarity_score, 70.0);
}
