//! Recording deduplication and ordering.
//!
//! The comparison policy is **by title only**: two recordings with the same
//! title are duplicates regardless of duration. This collapses genuinely
//! distinct recordings that share a title (a studio and a live version
//! become one entry) - a known limitation of the data model, kept as-is.
//!
//! Survivor choice is first-seen: the first recording carrying a title wins
//! and later duplicates are dropped.

use std::collections::BTreeMap;

use super::domain::Recording;

/// Deduplicate by title (first-seen survivor) and sort ascending by title
/// using ordinal comparison. Pure; empty input yields empty output.
pub fn dedup_and_sort(recordings: Vec<Recording>) -> Vec<Recording> {
    let mut by_title: BTreeMap<String, Recording> = BTreeMap::new();
    for recording in recordings {
        by_title.entry(recording.title.clone()).or_insert(recording);
    }
    by_title.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rec(title: &str, duration_ms: Option<u64>) -> Recording {
        Recording {
            title: title.to_string(),
            duration_ms,
            lyrics: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_and_sort(Vec::new()).is_empty());
    }

    #[test]
    fn test_sorts_by_title() {
        let out = dedup_and_sort(vec![rec("Charlie", None), rec("Alpha", None), rec("Bravo", None)]);
        let titles: Vec<_> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_first_seen_survives() {
        let out = dedup_and_sort(vec![
            rec("Same Title", Some(180_000)),
            rec("Same Title", Some(240_000)),
        ]);
        assert_eq!(out.len(), 1);
        // first-seen duration wins
        assert_eq!(out[0].duration_ms, Some(180_000));
    }

    #[test]
    fn test_ordinal_comparison_is_case_sensitive() {
        // Ordinal ordering puts all uppercase before lowercase
        let out = dedup_and_sort(vec![rec("apple", None), rec("Banana", None)]);
        let titles: Vec<_> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Banana", "apple"]);
    }

    proptest! {
        #[test]
        fn prop_output_unique_by_title(titles in proptest::collection::vec("[a-d]{0,4}", 0..30)) {
            let input: Vec<_> = titles.iter().map(|t| rec(t, None)).collect();
            let out = dedup_and_sort(input);
            for pair in out.windows(2) {
                prop_assert_ne!(&pair[0].title, &pair[1].title);
            }
        }

        #[test]
        fn prop_output_sorted(titles in proptest::collection::vec("[a-zA-Z0-9 ]{0,8}", 0..30)) {
            let input: Vec<_> = titles.iter().map(|t| rec(t, None)).collect();
            let out = dedup_and_sort(input);
            for pair in out.windows(2) {
                prop_assert!(pair[0].title < pair[1].title);
            }
        }

        #[test]
        fn prop_idempotent(titles in proptest::collection::vec("[a-z]{0,6}", 0..30)) {
            let input: Vec<_> = titles.iter().map(|t| rec(t, None)).collect();
            let once = dedup_and_sort(input);
            let titles_once: Vec<_> = once.iter().map(|r| r.title.clone()).collect();
            let twice = dedup_and_sort(once);
            let titles_twice: Vec<_> = twice.iter().map(|r| r.title.clone()).collect();
            prop_assert_eq!(titles_once, titles_twice);
        }
    }
}
