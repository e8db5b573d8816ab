//! Pagination constants for listing queries.

/// Default number of items per page when the configuration does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Largest number of items a listing query may skip.
///
/// MongoDB encodes `skip` as a signed 64-bit integer.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Sentinel used in a page window for an elided range of pages.
pub const PAGE_GAP: i64 = -1;

/// Up to this many pages the window lists every page with no gaps.
pub const MAX_PAGES_WITHOUT_GAPS: i64 = 7;

/// Pages shown on each side of the current page inside the window.
pub const WINDOW_RADIUS: i64 = 2;

/// Upper bound on window length: 7 page numbers plus 2 gaps.
pub const MAX_WINDOW_LEN: usize = 9;
