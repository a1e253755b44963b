//! Same store, same query, same answer.

use crate::common::{codes, sample_facade, store_of};
use pkgfind::{FieldScope, RegexScope, SimilarityEngine};

#[test]
fn test_repeated_queries_are_identical() {
    let catalog = sample_facade();

    for query in ["data", "big", "D1", "game"] {
        let first = catalog.search(query, 5, 30.0, FieldScope::Both);
        for _ in 0..5 {
            assert_eq!(catalog.search(query, 5, 30.0, FieldScope::Both), first);
        }
    }

    let regex = catalog.search_regex("a", RegexScope::All, false, 3).unwrap();
    assert_eq!(
        catalog.search_regex("a", RegexScope::All, false, 3).unwrap(),
        regex
    );
}

#[test]
fn test_equal_scores_all_survive() {
    let store = store_of(&["AB1", "AB2", "AB3"]);
    let results = SimilarityEngine::new(&store).search("AB", 10, 0.0, FieldScope::Code);

    // All three score the same against "AB"; their relative order is unspecified
    assert!(results
        .iter()
        .all(|r| r.similarity_score == results[0].similarity_score));
    let mut found = codes(&results);
    found.sort();
    assert_eq!(found, vec!["AB1", "AB2", "AB3"]);
}

#[test]
fn test_queries_do_not_mutate_the_store() {
    let catalog = sample_facade();
    let before: Vec<String> = catalog.store().folded_codes().to_vec();

    let _ = catalog.search("D15", 10, 0.0, FieldScope::Both);
    let _ = catalog.search_with_filters("D15", &pkgfind::SearchFilters::new().with_source("vnpt"), 0.0, 10);
    let _ = catalog.search_regex("^D", RegexScope::Code, false, 10);

    assert_eq!(catalog.store().folded_codes(), &before[..]);
    assert_eq!(catalog.len(), 8);
}
