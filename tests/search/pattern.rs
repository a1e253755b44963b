//! Regex search: scoping, provenance, limits, and rejected patterns.

use crate::common::{codes, make_record, sample_store, scenario_store, store_of};
use pkgfind::{MatchedField, PatternEngine, RecordStore, RegexScope, SearchError};

#[test]
fn test_code_pattern_scenario() {
    let store = scenario_store();
    let results = PatternEngine::new(&store)
        .search_regex("^D.*5$", RegexScope::Code, false, 100)
        .unwrap();

    assert_eq!(codes(&results), vec!["D15"]);
    assert!(results.iter().all(|r| r.similarity_score == 100.0));
}

#[test]
fn test_malformed_pattern_scenario() {
    let store = scenario_store();
    let result = PatternEngine::new(&store).search_regex("[unclosed(", RegexScope::Code, false, 100);

    match result {
        Err(SearchError::InvalidPattern { pattern, reason }) => {
            assert_eq!(pattern, "[unclosed(");
            assert!(!reason.is_empty());
        }
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_zero_matches_is_ok_not_error() {
    let store = scenario_store();
    let results = PatternEngine::new(&store)
        .search_regex("^ZZZ$", RegexScope::All, false, 100)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_results_keep_store_order() {
    let store = store_of(&["C3", "A1", "B2"]);
    let results = PatternEngine::new(&store)
        .search_regex(r"\d", RegexScope::Code, false, 10)
        .unwrap();
    assert_eq!(codes(&results), vec!["C3", "A1", "B2"]);
}

#[test]
fn test_limit_short_circuits_in_store_order() {
    let store = store_of(&["X1", "X2", "X3", "X4"]);
    let results = PatternEngine::new(&store)
        .search_regex("^X", RegexScope::Code, false, 2)
        .unwrap();
    assert_eq!(codes(&results), vec!["X1", "X2"]);
}

#[test]
fn test_code_field_has_priority_over_name() {
    let store = sample_store();
    let results = PatternEngine::new(&store)
        .search_regex("^big", RegexScope::Both, false, 10)
        .unwrap();

    assert_eq!(codes(&results), vec!["BIG70", "BIG90"]);
    assert!(results.iter().all(|r| r.matched_field == MatchedField::Code));
}

#[test]
fn test_name_field_when_code_misses() {
    let store = sample_store();
    let results = PatternEngine::new(&store)
        .search_regex("sieu toc", RegexScope::Both, false, 10)
        .unwrap();

    assert_eq!(codes(&results), vec!["ST30"]);
    assert_eq!(results[0].matched_field, MatchedField::Name);
}

#[test]
fn test_description_scope_excludes_code_and_name() {
    let store = sample_store();
    let results = PatternEngine::new(&store)
        .search_regex("data", RegexScope::Description, false, 10)
        .unwrap();

    // Only the two packages that carry a description mention "data" there
    assert_eq!(codes(&results), vec!["BIG70", "GAME50"]);
    assert!(results
        .iter()
        .all(|r| r.matched_field == MatchedField::Description));
}

#[test]
fn test_all_scope_reaches_full_description() {
    let store = sample_store();
    let results = PatternEngine::new(&store)
        .search_regex(r"\d+ phut", RegexScope::All, false, 10)
        .unwrap();

    assert_eq!(codes(&results), vec!["VD149"]);
    assert_eq!(results[0].matched_field, MatchedField::FullDescription);
}

#[test]
fn test_case_sensitive_flag() {
    let store = sample_store();
    let engine = PatternEngine::new(&store);

    let insensitive = engine.search_regex("^D5$", RegexScope::Code, false, 10).unwrap();
    assert_eq!(codes(&insensitive), vec!["d5"]);

    let sensitive = engine.search_regex("^D5$", RegexScope::Code, true, 10).unwrap();
    assert!(sensitive.is_empty());
}

#[test]
fn test_placeholder_fields_are_skipped() {
    let mut blank = make_record("A1");
    blank.description = Some("None".to_string());
    let store = RecordStore::new(vec![blank]);

    let results = PatternEngine::new(&store)
        .search_regex("(?i)none", RegexScope::Description, true, 10)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_blank_pattern_is_empty_ok() {
    let store = sample_store();
    assert_eq!(
        PatternEngine::new(&store).search_regex("   ", RegexScope::All, false, 10),
        Ok(Vec::new())
    );
}
