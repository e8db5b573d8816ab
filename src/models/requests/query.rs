use crate::config::CONFIG;
use crate::constants::{DEFAULT_PAGE_NUMBER, MAX_SKIP};

/// Normalised page request: which page, how many per page, and an optional
/// search term.
///
/// Construction enforces `page >= 1`; `limit == 0` means "no pagination".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    page: u64,
    limit: u64,
    search: String,
}

impl QuerySpec {
    /// Non-positive pages become page 1, negative limits become 0, and the
    /// search term is trimmed.
    pub fn new(page: i64, limit: i64, search: impl AsRef<str>) -> Self {
        Self {
            page: u64::try_from(page)
                .ok()
                .filter(|p| *p > 0)
                .unwrap_or(DEFAULT_PAGE_NUMBER),
            limit: u64::try_from(limit).unwrap_or(0),
            search: search.as_ref().trim().to_string(),
        }
    }

    /// Build from raw request parameters. An absent, unparsable, or
    /// non-positive page falls back to page 1; an absent limit uses the
    /// configured posts per page.
    pub fn from_params(page: Option<&str>, limit: Option<u64>, search: Option<&str>) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE_NUMBER);

        Self {
            page,
            limit: limit.unwrap_or(CONFIG.posts_per_page),
            search: search.unwrap_or_default().trim().to_string(),
        }
    }

    /// Every matching item on a single page.
    pub fn unpaginated(search: impl AsRef<str>) -> Self {
        Self::new(1, 0, search)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_paginated(&self) -> bool {
        self.limit > 0
    }

    /// Number of matching items to skip; zero when pagination is off.
    /// Capped at [`MAX_SKIP`], far past any real result set.
    pub fn skip(&self) -> u64 {
        if self.is_paginated() {
            (self.page - 1).saturating_mul(self.limit).min(MAX_SKIP)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_page_defaults_to_one() {
        assert_eq!(QuerySpec::new(0, 10, "").page(), 1);
        assert_eq!(QuerySpec::new(-4, 10, "").page(), 1);
        assert_eq!(QuerySpec::new(3, 10, "").page(), 3);
    }

    #[test]
    fn test_negative_limit_disables_pagination() {
        let spec = QuerySpec::new(5, -1, "");
        assert_eq!(spec.limit(), 0);
        assert!(!spec.is_paginated());
        assert_eq!(spec.skip(), 0);
    }

    #[test]
    fn test_skip_is_page_offset() {
        assert_eq!(QuerySpec::new(1, 10, "").skip(), 0);
        assert_eq!(QuerySpec::new(3, 10, "").skip(), 20);
        assert_eq!(QuerySpec::new(i64::MAX, i64::MAX, "").skip(), MAX_SKIP);
        assert_eq!(QuerySpec::new(i64::MAX, 12, "").skip(), MAX_SKIP);
    }

    #[test]
    fn test_from_params_parses_page() {
        assert_eq!(QuerySpec::from_params(Some("4"), Some(12), None).page(), 4);
        assert_eq!(QuerySpec::from_params(Some("abc"), Some(12), None).page(), 1);
        assert_eq!(QuerySpec::from_params(Some("-2"), Some(12), None).page(), 1);
        assert_eq!(QuerySpec::from_params(Some("0"), Some(12), None).page(), 1);
        assert_eq!(QuerySpec::from_params(None, Some(12), None).page(), 1);
    }

    #[test]
    fn test_from_params_defaults_to_configured_page_size() {
        let spec = QuerySpec::from_params(Some("2"), None, None);
        assert_eq!(spec.limit(), CONFIG.posts_per_page);
        assert_eq!(spec.skip(), CONFIG.posts_per_page);
    }

    #[test]
    fn test_search_is_trimmed() {
        let spec = QuerySpec::from_params(None, Some(12), Some("  rust  "));
        assert_eq!(spec.search(), "rust");
        assert_eq!(spec.limit(), 12);
        assert_eq!(QuerySpec::unpaginated("   ").search(), "");
    }
}
