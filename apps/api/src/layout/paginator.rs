//! Page Paginator: distributes entries across pages and derives the
//! per-page and per-entry decoration flags.
//!
//! Entries are atomic: a page holds whole entries only. Every entry lands on
//! exactly one page, pages keep source order, and nothing is ever padded.

use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;

// ────────────────────────────────────────────────────────────────────────────
// Plan
// ────────────────────────────────────────────────────────────────────────────

/// How entries are grouped into pages.
///
/// Sizes are signed so that a negative declaration coming from a request body
/// is rejected with a configuration error instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionPlan {
    /// Explicit page sizes, in page order. Must sum to the entry count.
    Sizes(Vec<i64>),
    /// Left-to-right chunks of at most this many entries.
    Capacity(i64),
}

impl PartitionPlan {
    /// Resolves the plan into concrete page sizes for `total` entries.
    pub fn page_sizes(&self, total: usize) -> Result<Vec<usize>, LayoutError> {
        match self {
            PartitionPlan::Sizes(sizes) => {
                let mut resolved = Vec::with_capacity(sizes.len());
                let mut declared = 0usize;
                for (page, &size) in sizes.iter().enumerate() {
                    if size < 0 {
                        return Err(LayoutError::config(format!(
                            "page {page} declares a negative size ({size})"
                        )));
                    }
                    if size == 0 {
                        return Err(LayoutError::config(format!(
                            "page {page} declares zero entries"
                        )));
                    }
                    // `declared <= total` holds here, so the subtraction cannot underflow.
                    let size = usize::try_from(size)
                        .ok()
                        .filter(|&size| size <= total - declared)
                        .ok_or_else(|| {
                            LayoutError::config(format!(
                                "page sizes exceed the {total} available entries (page {page} declares {size})"
                            ))
                        })?;
                    declared += size;
                    resolved.push(size);
                }

                if declared != total {
                    return Err(LayoutError::config(format!(
                        "page sizes sum to {declared} but there are {total} entries"
                    )));
                }
                Ok(resolved)
            }

            PartitionPlan::Capacity(capacity) => {
                if *capacity < 1 {
                    return Err(LayoutError::config(format!(
                        "page capacity must be at least 1 (got {capacity})"
                    )));
                }
                let capacity = usize::try_from(*capacity).unwrap_or(usize::MAX);
                let full_pages = total / capacity;
                let mut resolved = vec![capacity; full_pages];
                if total % capacity != 0 {
                    resolved.push(total % capacity);
                }
                Ok(resolved)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// An entry placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEntry<T> {
    pub entry: T,
    /// True only for the final entry of its page.
    pub is_last_in_page: bool,
}

/// One page of a pagination result. Pages carry no identity across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub index: usize,
    pub entries: Vec<PageEntry<T>>,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Splits `entries` into pages according to `plan`.
///
/// The plan is validated before anything is built, so a failing call
/// produces no partial output.
pub fn paginate<T: Clone>(entries: &[T], plan: &PartitionPlan) -> Result<Vec<Page<T>>, LayoutError> {
    let sizes = plan.page_sizes(entries.len())?;
    let page_count = sizes.len();

    let mut pages = Vec::with_capacity(page_count);
    let mut offset = 0usize;

    for (index, size) in sizes.into_iter().enumerate() {
        let slice = &entries[offset..offset + size];
        offset += size;

        let page_entries = slice
            .iter()
            .enumerate()
            .map(|(i, entry)| PageEntry {
                entry: entry.clone(),
                is_last_in_page: i + 1 == size,
            })
            .collect();

        pages.push(Page {
            index,
            entries: page_entries,
            is_first_page: index == 0,
            is_last_page: index + 1 == page_count,
        });
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("e{i}")).collect()
    }

    fn sizes_of<T>(pages: &[Page<T>]) -> Vec<usize> {
        pages.iter().map(Page::len).collect()
    }

    #[test]
    fn test_capacity_chunks_with_short_tail() {
        let pages = paginate(&entries(11), &PartitionPlan::Capacity(3)).unwrap();
        assert_eq!(sizes_of(&pages), vec![3, 3, 3, 2]);

        assert!(pages[0].is_first_page);
        assert!(pages[1..].iter().all(|p| !p.is_first_page));
        assert!(pages[3].is_last_page);
        assert!(pages[..3].iter().all(|p| !p.is_last_page));

        let last = pages[3].entries.last().unwrap();
        assert_eq!(last.entry, "e11");
        assert!(last.is_last_in_page);
    }

    #[test]
    fn test_capacity_exact_multiple_has_no_empty_tail() {
        let pages = paginate(&entries(6), &PartitionPlan::Capacity(3)).unwrap();
        assert_eq!(sizes_of(&pages), vec![3, 3]);
    }

    #[test]
    fn test_single_page_is_first_and_last() {
        let pages = paginate(&entries(2), &PartitionPlan::Capacity(10)).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_first_page && pages[0].is_last_page);
    }

    #[test]
    fn test_empty_sizes_for_no_entries() {
        let pages = paginate::<String>(&[], &PartitionPlan::Sizes(vec![])).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_capacity_on_no_entries_is_empty() {
        let pages = paginate::<String>(&[], &PartitionPlan::Capacity(4)).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_sum_mismatch_is_rejected() {
        let err = paginate(&entries(2), &PartitionPlan::Sizes(vec![5])).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration(ref m) if m.contains("5") && m.contains("2")));
    }

    #[test]
    fn test_too_few_slots_is_rejected() {
        assert!(paginate(&entries(4), &PartitionPlan::Sizes(vec![3])).is_err());
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let err = paginate(&entries(2), &PartitionPlan::Sizes(vec![3, -1])).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration(ref m) if m.contains("negative")));
    }

    #[test]
    fn test_zero_size_page_is_rejected() {
        assert!(paginate(&entries(2), &PartitionPlan::Sizes(vec![0, 2])).is_err());
    }

    #[test]
    fn test_capacity_below_one_is_rejected() {
        assert!(paginate(&entries(2), &PartitionPlan::Capacity(0)).is_err());
        assert!(paginate(&entries(2), &PartitionPlan::Capacity(-3)).is_err());
    }

    #[test]
    fn test_oversized_sizes_do_not_overflow() {
        let huge = 1i64 << 62;
        let err = paginate::<u8>(&[], &PartitionPlan::Sizes(vec![huge; 4])).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration(ref m) if m.contains("exceed")));

        let err = paginate(&entries(3), &PartitionPlan::Sizes(vec![i64::MAX, i64::MAX])).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration(_)));
    }

    #[test]
    fn test_huge_capacity_is_single_page() {
        let pages = paginate(&entries(3), &PartitionPlan::Capacity(i64::MAX)).unwrap();
        assert_eq!(sizes_of(&pages), vec![3]);
    }

    #[test]
    fn test_explicit_sizes_preserve_order() {
        let pages = paginate(&entries(11), &PartitionPlan::Sizes(vec![3, 8])).unwrap();
        assert_eq!(sizes_of(&pages), vec![3, 8]);
        assert_eq!(pages[0].entries[0].entry, "e1");
        assert_eq!(pages[1].entries[0].entry, "e4");
        assert_eq!(pages[1].index, 1);

        for page in &pages {
            let flags: Vec<bool> = page.entries.iter().map(|e| e.is_last_in_page).collect();
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
            assert!(*flags.last().unwrap());
        }
    }

    #[test]
    fn test_plan_deserializes_from_json() {
        let plan: PartitionPlan = serde_json::from_str(r#"{"capacity": 3}"#).unwrap();
        assert_eq!(plan, PartitionPlan::Capacity(3));
        let plan: PartitionPlan = serde_json::from_str(r#"{"sizes": [3, -1]}"#).unwrap();
        assert_eq!(plan, PartitionPlan::Sizes(vec![3, -1]));
    }
}
