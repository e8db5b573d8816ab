//! Compact page-number window for paging UIs.
//!
//! A window always shows the first and last page, up to five pages around the
//! current one, and a [`PAGE_GAP`] wherever a run of pages is elided:
//!
//! ```text
//! total = 10, current = 5  ->  1 … 3 4 5 6 7 … 10
//! ```

use serde::Serialize;

use crate::constants::{MAX_PAGES_WITHOUT_GAPS, MAX_WINDOW_LEN, PAGE_GAP, WINDOW_RADIUS};

/// One entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageSlot {
    Page(i64),
    Gap,
}

/// Page window for `current` out of `total_pages`, gaps encoded as [`PAGE_GAP`].
///
/// `current` is used as given. Callers holding unchecked input should pass it
/// through [`clamp_page`] first.
pub fn page_window(current: i64, total_pages: i64) -> Vec<i64> {
    if total_pages <= MAX_PAGES_WITHOUT_GAPS {
        return page_sequence(1, total_pages);
    }

    let mut start = current.saturating_sub(WINDOW_RADIUS);
    let mut end = current.saturating_add(WINDOW_RADIUS);
    let interior = 2 * WINDOW_RADIUS;

    if start <= 1 {
        start = 2;
        end = (start + interior).min(total_pages - 1);
    } else if end >= total_pages {
        end = total_pages - 1;
        start = (end - interior).max(2);
    }

    let mut window = Vec::with_capacity(MAX_WINDOW_LEN);
    window.push(1);
    if start > 2 {
        window.push(PAGE_GAP);
    }
    window.extend(start..=end);
    if end < total_pages - 1 {
        window.push(PAGE_GAP);
    }
    window.push(total_pages);
    window
}

/// Same window as [`page_window`], with gaps as a distinct variant.
pub fn window_slots(current: i64, total_pages: i64) -> Vec<PageSlot> {
    page_window(current, total_pages)
        .into_iter()
        .map(|n| {
            if n == PAGE_GAP {
                PageSlot::Gap
            } else {
                PageSlot::Page(n)
            }
        })
        .collect()
}

/// Clamp a requested page into `[1, total_pages]`.
///
/// A non-positive `total_pages` is treated as a single page.
pub fn clamp_page(current: i64, total_pages: i64) -> i64 {
    current.clamp(1, total_pages.max(1))
}

/// Inclusive run of page numbers; empty when `start > end`.
pub fn page_sequence(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_totals_list_every_page() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
        for total in 1..=7 {
            for current in 1..=total {
                assert_eq!(page_window(current, total), page_sequence(1, total));
            }
        }
    }

    #[test]
    fn test_middle_page_has_gaps_on_both_sides() {
        assert_eq!(page_window(5, 10), vec![1, -1, 3, 4, 5, 6, 7, -1, 10]);
    }

    #[test]
    fn test_first_page_has_no_leading_gap() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5, 6, -1, 10]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5, 6, -1, 10]);
    }

    #[test]
    fn test_last_page_has_no_trailing_gap() {
        assert_eq!(page_window(10, 10), vec![1, -1, 5, 6, 7, 8, 9, 10]);
        assert_eq!(page_window(8, 10), vec![1, -1, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_threshold_seven_pages() {
        assert_eq!(page_window(4, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(7, 7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_threshold_eight_pages() {
        assert_eq!(page_window(1, 8), vec![1, 2, 3, 4, 5, 6, -1, 8]);
        assert_eq!(page_window(4, 8), vec![1, 2, 3, 4, 5, 6, -1, 8]);
        assert_eq!(page_window(5, 8), vec![1, -1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(page_window(8, 8), vec![1, -1, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_window_invariants_for_large_totals() {
        for total in 8..=60 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert_eq!(window.first(), Some(&1));
                assert_eq!(window.last(), Some(&total));
                assert!(window.len() <= MAX_WINDOW_LEN, "{current}/{total}: {window:?}");
                assert!(window.contains(&current), "{current}/{total}: {window:?}");
                assert!(
                    window.windows(2).all(|w| !(w[0] == PAGE_GAP && w[1] == PAGE_GAP)),
                    "{current}/{total}: {window:?}"
                );
                let pages: Vec<i64> = window.iter().copied().filter(|n| *n != PAGE_GAP).collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(pages.len(), 7);
            }
        }
    }

    #[test]
    fn test_gap_marks_only_elided_ranges() {
        for total in 8..=30 {
            for current in 1..=total {
                let window = page_window(current, total);
                for (i, n) in window.iter().enumerate() {
                    if *n == PAGE_GAP {
                        assert!(window[i + 1] - window[i - 1] > 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_current_is_not_clamped() {
        assert_eq!(page_window(50, 10), vec![1, -1, 5, 6, 7, 8, 9, 10]);
        assert_eq!(page_window(-3, 10), vec![1, 2, 3, 4, 5, 6, -1, 10]);
        assert_eq!(page_window(i64::MAX, 10), vec![1, -1, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(-7, 10), 1);
        assert_eq!(clamp_page(11, 10), 10);
        assert_eq!(clamp_page(5, 10), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn test_window_slots() {
        assert_eq!(
            window_slots(1, 9),
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Page(6),
                PageSlot::Gap,
                PageSlot::Page(9),
            ]
        );
    }

    #[test]
    fn test_page_sequence() {
        assert_eq!(page_sequence(2, 5), vec![2, 3, 4, 5]);
        assert_eq!(page_sequence(4, 4), vec![4]);
        assert!(page_sequence(5, 2).is_empty());
    }
}
