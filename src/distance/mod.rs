//! Edit distances and the derived similarity score.
//!
//! Domains reach this module already lowercased and IDNA-ASCII encoded, so
//! `strsim`'s per-character distances line up with the byte lengths used for
//! the score.

mod metric;

pub use metric::{Metric, ParseMetricError};

/// Edit distance between `a` and `b` under `metric`.
pub fn distance(a: &str, b: &str, metric: Metric) -> usize {
    match metric {
        Metric::Levenshtein => strsim::levenshtein(a, b),
        // optimal string alignment: a transposed pair is never edited again
        Metric::Damerau => strsim::osa_distance(a, b),
    }
}

/// Similarity in `[0, 1]`: `1 - distance / max(len(a), len(b), 1)`.
pub fn normalized_score(a: &str, b: &str, metric: Metric) -> f64 {
    let dist = distance(a, b, metric) as f64;
    let den = a.len().max(b.len()).max(1) as f64;
    (1.0 - dist / den).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(distance("", "", Metric::Levenshtein), 0);
        assert_eq!(distance("abc", "", Metric::Levenshtein), 3);
        assert_eq!(distance("kitten", "sitting", Metric::Levenshtein), 3);
        assert_eq!(distance("yaho.com", "yahoo.com", Metric::Levenshtein), 1);
    }

    #[test]
    fn transposition_costs_one_only_with_damerau() {
        assert_eq!(distance("gmial.com", "gmail.com", Metric::Levenshtein), 2);
        assert_eq!(distance("gmial.com", "gmail.com", Metric::Damerau), 1);
        assert_eq!(distance("ab", "ba", Metric::Damerau), 1);
    }

    #[test]
    fn osa_does_not_edit_transposed_pair_twice() {
        // "ca" -> "abc" is 2 under unrestricted Damerau, 3 under OSA.
        assert_eq!(distance("ca", "abc", Metric::Damerau), 3);
    }

    #[test]
    fn score_is_normalized() {
        assert_eq!(normalized_score("", "", Metric::Levenshtein), 1.0);
        assert_eq!(normalized_score("abc", "xyz", Metric::Levenshtein), 0.0);
        let s = normalized_score("yaho.com", "yahoo.com", Metric::Levenshtein);
        assert!((s - (1.0 - 1.0 / 9.0)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn identity_is_zero(s in "[a-z0-9.-]{0,24}") {
            prop_assert_eq!(distance(&s, &s, Metric::Levenshtein), 0);
            prop_assert_eq!(distance(&s, &s, Metric::Damerau), 0);
        }

        #[test]
        fn symmetric(a in "[a-z.]{0,16}", b in "[a-z.]{0,16}") {
            for metric in [Metric::Levenshtein, Metric::Damerau] {
                prop_assert_eq!(distance(&a, &b, metric), distance(&b, &a, metric));
            }
        }

        #[test]
        fn damerau_never_exceeds_levenshtein(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            prop_assert!(distance(&a, &b, Metric::Damerau) <= distance(&a, &b, Metric::Levenshtein));
        }

        #[test]
        fn score_in_unit_interval(a in "[a-z.]{0,16}", b in "[a-z.]{0,16}") {
            let s = normalized_score(&a, &b, Metric::Damerau);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
