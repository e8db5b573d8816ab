//! Paged listing result.

use serde::Serialize;

use crate::models::ContentItem;
use crate::pagination::{clamp_page, page_window};

/// One page of a listing plus the figures needed to render navigation.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    /// Items on this page, newest first
    pub items: Vec<ContentItem>,
    /// Number of items matching the filter, ignoring skip/limit
    pub total_count: u64,
    /// Requested page number (1-based)
    pub page: u64,
    /// Items per page; 0 when pagination is off
    pub per_page: u64,
    /// Total number of pages, never 0
    pub total_pages: u64,
}

impl ListPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the requested page lies past the last page of results.
    pub fn is_out_of_range(&self) -> bool {
        self.page > self.total_pages
    }

    /// Navigation window for this page, with the current page clamped into
    /// `[1, total_pages]`.
    pub fn window(&self) -> Vec<i64> {
        let total = to_i64(self.total_pages);
        page_window(clamp_page(to_i64(self.page), total), total)
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
