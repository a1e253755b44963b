//! Similarity measure properties.

use proptest::prelude::*;
use pkgfind::fuzzy::{indel_distance_str, partial_ratio, ratio, token_set_ratio, token_sort_ratio};
use pkgfind::wratio;

/// Short uppercase strings with the occasional space, like folded codes and names.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-D0-3 ]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every measure stays on the 0-100 scale.
    #[test]
    fn prop_scores_in_range(a in text_strategy(), b in text_strategy()) {
        for score in [
            ratio(&a, &b),
            partial_ratio(&a, &b),
            token_sort_ratio(&a, &b),
            token_set_ratio(&a, &b),
            wratio(&a, &b),
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "score {} for {:?} / {:?}", score, a, b);
        }
    }

    /// Argument order does not matter.
    #[test]
    fn prop_wratio_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert!((wratio(&a, &b) - wratio(&b, &a)).abs() < 1e-9);
    }

    /// A non-empty string is a perfect match for itself.
    #[test]
    fn prop_identity_scores_100(a in "[A-Z0-9]{1,10}") {
        prop_assert_eq!(wratio(&a, &a), 100.0);
        prop_assert_eq!(ratio(&a, &a), 100.0);
    }

    /// wratio never undercuts the plain ratio.
    #[test]
    fn prop_wratio_at_least_ratio(a in "[A-Z0-9]{1,10}", b in "[A-Z0-9]{1,10}") {
        prop_assert!(wratio(&a, &b) + 1e-9 >= ratio(&a, &b));
    }

    /// Indel distance is bounded by the total length and zero only for equal strings.
    #[test]
    fn prop_indel_bounds(a in text_strategy(), b in text_strategy()) {
        let d = indel_distance_str(&a, &b);
        prop_assert!(d <= a.chars().count() + b.chars().count());
        prop_assert_eq!(d == 0, a == b);
    }
}
