//! Fuzzy search over codes and names.

use crate::common::{
    assert_sorted_desc, assert_unique_codes, codes, make_record, make_record_with_name,
    sample_store, scenario_store,
};
use pkgfind::{wratio, FieldScope, MatchedField, RecordStore, SimilarityEngine, DEFAULT_THRESHOLD};

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_exact_code_ranks_first_with_full_score() {
    let store = scenario_store();
    let results = SimilarityEngine::new(&store).search("D15", 10, 60.0, FieldScope::Both);

    assert_eq!(results[0].code(), "D15");
    assert_eq!(results[0].similarity_score, 100.0);
    assert_eq!(results[0].matched_field, MatchedField::Code);
}

#[test]
fn test_neighbor_code_at_default_threshold() {
    let store = scenario_store();
    let results = SimilarityEngine::new(&store).search("D15", 10, 60.0, FieldScope::Both);

    // D10 shares two of three characters: 100 * (1 - 2/6)
    let d10 = wratio("D15", "D10");
    assert!((d10 - 66.666).abs() < 0.01, "D10 scored {}", d10);

    assert_eq!(codes(&results), vec!["D15", "D10"]);
    assert_eq!(results[1].matched_field, MatchedField::Code);
}

#[test]
fn test_neighbor_code_dropped_above_its_score() {
    let store = scenario_store();
    let results = SimilarityEngine::new(&store).search("D15", 10, 70.0, FieldScope::Both);
    assert_eq!(codes(&results), vec!["D15"]);
}

#[test]
fn test_threshold_is_inclusive() {
    let store = scenario_store();
    let d10 = wratio("D15", "D10");
    let results = SimilarityEngine::new(&store).search("D15", 10, d10, FieldScope::Code);
    assert!(codes(&results).contains(&"D10".to_string()));
}

#[test]
fn test_code_match_beats_stronger_name_match() {
    let store = sample_store();
    let results = SimilarityEngine::new(&store).search("big 70", 10, 60.0, FieldScope::Both);

    assert_eq!(results[0].code(), "BIG70");
    assert_eq!(results[0].matched_field, MatchedField::Code);
    assert!(results[0].similarity_score < 100.0);

    let big90 = results.iter().find(|r| r.code() == "BIG90").unwrap();
    assert_eq!(big90.matched_field, MatchedField::Code);
}

#[test]
fn test_name_only_scope() {
    let store = sample_store();
    let results = SimilarityEngine::new(&store).search("game thu vi", 10, 90.0, FieldScope::Name);

    assert_eq!(codes(&results), vec!["GAME50"]);
    assert_eq!(results[0].matched_field, MatchedField::Name);
    assert_eq!(results[0].similarity_score, 100.0);
}

#[test]
fn test_code_only_scope_ignores_names() {
    let store = sample_store();
    let results = SimilarityEngine::new(&store).search("game thu vi", 10, 90.0, FieldScope::Code);
    assert!(results.is_empty());
}

// ============================================================================
// INVARIANTS
// ============================================================================

#[test]
fn test_results_respect_threshold_limit_and_order() {
    let store = sample_store();
    let engine = SimilarityEngine::new(&store);

    for query in ["data", "D1", "big", "vinaphone", "st", "5"] {
        for threshold in [0.0, 30.0, DEFAULT_THRESHOLD, 90.0] {
            let results = engine.search(query, 3, threshold, FieldScope::Both);
            assert!(results.len() <= 3);
            assert_unique_codes(&results);
            assert_sorted_desc(&results);
            for r in &results {
                assert!(r.similarity_score >= threshold, "{} < {}", r.similarity_score, threshold);
                assert!(r.similarity_score <= 100.0);
            }
        }
    }
}

#[test]
fn test_out_of_range_thresholds_are_clamped() {
    let store = scenario_store();
    let engine = SimilarityEngine::new(&store);

    assert_eq!(
        codes(&engine.search("D15", 10, 250.0, FieldScope::Code)),
        vec!["D15"]
    );
    assert_eq!(
        engine.search("D15", 10, -5.0, FieldScope::Code).len(),
        engine.search("D15", 10, 0.0, FieldScope::Code).len()
    );
    assert_eq!(
        engine.search("D15", 10, f64::NAN, FieldScope::Code).len(),
        engine.search("D15", 10, DEFAULT_THRESHOLD, FieldScope::Code).len()
    );
}

#[test]
fn test_empty_query_is_not_an_error() {
    let store = sample_store();
    let engine = SimilarityEngine::new(&store);

    assert!(engine.search("", 10, 0.0, FieldScope::Both).is_empty());
    assert!(engine.search(" \t ", 10, 0.0, FieldScope::Both).is_empty());
}

#[test]
fn test_empty_store() {
    let store = RecordStore::default();
    assert!(SimilarityEngine::new(&store)
        .search("D15", 10, 0.0, FieldScope::Both)
        .is_empty());
}

#[test]
fn test_codes_only_dataset() {
    let store: RecordStore = vec![make_record("D15"), make_record("D10")]
        .into_iter()
        .collect();
    let engine = SimilarityEngine::new(&store);

    assert!(!store.supports_name_search());
    assert!(engine.search("D15", 10, 0.0, FieldScope::Name).is_empty());
    assert_eq!(engine.search("D15", 10, 60.0, FieldScope::Both).len(), 2);
}

#[test]
fn test_unicode_names_fold() {
    let store = RecordStore::new(vec![make_record_with_name("TK1", "Gói cước Tốc Độ")]);
    let results = SimilarityEngine::new(&store).search("gói cước tốc độ", 10, 100.0, FieldScope::Name);
    assert_eq!(codes(&results), vec!["TK1"]);
}

// ============================================================================
// EXACT MATCH
// ============================================================================

#[test]
fn test_exact_match_is_case_insensitive() {
    let store = sample_store();
    let engine = SimilarityEngine::new(&store);

    let hit = engine.exact_match("D5").unwrap();
    assert_eq!(hit.code(), "d5");
    assert_eq!(hit.matched_field, MatchedField::Exact);
    assert_eq!(hit.similarity_score, 100.0);
}

#[test]
fn test_exact_match_miss() {
    let store = sample_store();
    let engine = SimilarityEngine::new(&store);

    assert!(engine.exact_match("D1").is_none());
    assert!(engine.exact_match("   ").is_none());
}
