use proptest::prelude::*;

use super::charset::{url_breaks, word_breaks, BreakRule, SpecialSet};
use super::error::LayoutError;
use super::paginator::{paginate, PartitionPlan};
use super::segmenter::segment;
use super::wrapper::{rejoin, wrap};

fn mixed_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ./ăĂâÂîÎșȘțȚ🦀-]{0,80}"
}

// Property: concatenating the runs reconstructs the input
proptest! {
    #[test]
    fn prop_segment_reconstructs(s in mixed_text()) {
        let runs = segment(&s, &SpecialSet::romanian());
        let rebuilt: String = runs.iter().map(|r| r.text.as_str()).collect();
        prop_assert_eq!(rebuilt, s);
    }
}

// Property: runs are non-empty and maximally coalesced
proptest! {
    #[test]
    fn prop_segment_coalesces(s in mixed_text()) {
        let runs = segment(&s, &SpecialSet::romanian());
        prop_assert!(runs.iter().all(|r| !r.text.is_empty()));
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].class, pair[1].class);
        }
    }
}

// Property: re-segmenting the joined runs reproduces the same runs
proptest! {
    #[test]
    fn prop_segment_idempotent(s in mixed_text()) {
        let set = SpecialSet::romanian();
        let runs = segment(&s, &set);
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        prop_assert_eq!(segment(&joined, &set), runs);
    }
}

// Property: text that fits is returned as a single untouched line
proptest! {
    #[test]
    fn prop_wrap_noop_when_fits(s in "[a-z ./]{1,30}", extra in 0usize..10) {
        let width = s.chars().count() + extra;
        let lines = wrap(&s, width, url_breaks()).unwrap();
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(&lines[0].text, &s);
    }
}

// Property: wrapping terminates, respects the width, and rejoins losslessly
proptest! {
    #[test]
    fn prop_wrap_bounded_and_lossless(s in mixed_text(), width in 1usize..25, words in any::<bool>()) {
        let mixed = [BreakRule::exclusive(' '), BreakRule::inclusive('/'), BreakRule::inclusive('.')];
        let rules: &[BreakRule] = if words { word_breaks() } else { &mixed };
        let lines = wrap(&s, width, rules).unwrap();

        if s.is_empty() {
            prop_assert!(lines.is_empty());
        }
        for line in &lines {
            let n = line.text.chars().count();
            prop_assert!(n >= 1);
            prop_assert!(n <= width);
        }
        prop_assert_eq!(rejoin(&lines), s);
    }
}

// Property: every entry appears once, in order, and flags are exclusive
proptest! {
    #[test]
    fn prop_paginate_complete_and_flagged(n in 0usize..40, capacity in 1i64..8) {
        let entries: Vec<usize> = (0..n).collect();
        let pages = paginate(&entries, &PartitionPlan::Capacity(capacity)).unwrap();

        let flattened: Vec<usize> = pages
            .iter()
            .flat_map(|p| p.entries.iter().map(|e| e.entry))
            .collect();
        prop_assert_eq!(flattened, entries);

        if n > 0 {
            prop_assert_eq!(pages.iter().filter(|p| p.is_first_page).count(), 1);
            prop_assert_eq!(pages.iter().filter(|p| p.is_last_page).count(), 1);
            prop_assert!(pages[0].is_first_page);
            prop_assert!(pages[pages.len() - 1].is_last_page);
        } else {
            prop_assert!(pages.is_empty());
        }

        for page in &pages {
            prop_assert!((page.len() as i64) <= capacity);
            prop_assert_eq!(page.entries.iter().filter(|e| e.is_last_in_page).count(), 1);
            prop_assert!(page.entries.last().map(|e| e.is_last_in_page).unwrap_or(false));
        }
    }
}

// Property: explicit sizes matching the entry count always paginate exactly
proptest! {
    #[test]
    fn prop_paginate_explicit_sizes(sizes in prop::collection::vec(1i64..6, 0..8)) {
        let total: i64 = sizes.iter().sum();
        let entries: Vec<i64> = (0..total).collect();
        let pages = paginate(&entries, &PartitionPlan::Sizes(sizes.clone())).unwrap();

        let got: Vec<i64> = pages.iter().map(|p| p.len() as i64).collect();
        prop_assert_eq!(got, sizes);
    }
}

fn any_page_size() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => -2i64..6,
        1 => any::<i64>(),
        1 => Just(i64::MAX),
        1 => Just(1i64 << 62),
    ]
}

// Property: arbitrary explicit sizes either paginate exactly or fail with a configuration error
proptest! {
    #[test]
    fn prop_paginate_arbitrary_sizes(n in 0usize..20, sizes in prop::collection::vec(any_page_size(), 0..6)) {
        let entries: Vec<usize> = (0..n).collect();
        let valid = sizes.iter().all(|&s| s >= 1)
            && sizes.iter().map(|&s| s as i128).sum::<i128>() == n as i128;

        match paginate(&entries, &PartitionPlan::Sizes(sizes.clone())) {
            Ok(pages) => {
                prop_assert!(valid);
                let got: Vec<i64> = pages.iter().map(|p| p.len() as i64).collect();
                prop_assert_eq!(got, sizes);
            }
            Err(LayoutError::Configuration(_)) => prop_assert!(!valid),
        }
    }
}
