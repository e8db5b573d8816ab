//! Total page count for a listing.

/// Number of pages needed to show `count` items, `limit` per page.
///
/// An empty result set and an unpaginated listing (`limit == 0`) both have
/// exactly one page.
pub fn total_pages(count: u64, limit: u64) -> u64 {
    if limit == 0 || count == 0 {
        return 1;
    }
    count.div_ceil(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_last_page_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(3, 2), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(12, 12), 1);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(0, 0), 1);
    }

    #[test]
    fn test_unpaginated_has_one_page() {
        assert_eq!(total_pages(250, 0), 1);
    }

    #[test]
    fn test_matches_ceiling_division() {
        for count in 1..200u64 {
            for limit in 1..25u64 {
                let expected = (count + limit - 1) / limit;
                assert_eq!(total_pages(count, limit), expected, "{count}/{limit}");
            }
        }
        assert_eq!(total_pages(u64::MAX, 1), u64::MAX);
        assert_eq!(total_pages(u64::MAX, u64::MAX), 1);
    }
}
