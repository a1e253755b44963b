//! Autocomplete suggestions.

use crate::common::{sample_store, store_of};
use pkgfind::SimilarityEngine;

#[test]
fn test_prefix_scenario() {
    let store = store_of(&["D15", "D10", "BIG20"]);
    assert_eq!(SimilarityEngine::new(&store).suggest("D", 2), vec!["D15", "D10"]);
}

#[test]
fn test_prefix_is_case_insensitive_and_returns_stored_case() {
    let store = sample_store();
    let suggestions = SimilarityEngine::new(&store).suggest("d", 5);

    assert_eq!(&suggestions[..3], &["D15", "D10", "d5"]);
}

#[test]
fn test_prefix_matches_come_before_fuzzy() {
    let store = store_of(&["XD15", "D15", "AD1"]);
    let suggestions = SimilarityEngine::new(&store).suggest("D1", 5);

    assert_eq!(suggestions[0], "D15");
    assert!(suggestions.contains(&"XD15".to_string()));
    assert!(suggestions.contains(&"AD1".to_string()));
}

#[test]
fn test_fuzzy_fallback_threshold_is_exclusive() {
    // "AB" against "AX" peaks at 66.7 (the "A" overhang), under the cutoff
    let store = store_of(&["AX", "ZZ"]);
    assert!(SimilarityEngine::new(&store).suggest("AB", 5).is_empty());
}

#[test]
fn test_limit_and_uniqueness() {
    let store = store_of(&["D1", "d1", "D2", "D3", "D4"]);
    let suggestions = SimilarityEngine::new(&store).suggest("d", 3);

    assert_eq!(suggestions, vec!["D1", "D2", "D3"]);
}

#[test]
fn test_no_suggestions_for_blank_input() {
    let store = sample_store();
    assert!(SimilarityEngine::new(&store).suggest("  ", 5).is_empty());
}
