//! Log sanitization utilities for user-supplied text.
//!
//! Search terms come straight from end users. Before they reach a log line
//! they are shortened and stripped of control characters so a single
//! request cannot flood the log or forge extra lines.

/// Longest search term logged verbatim, in characters.
pub const MAX_LOGGED_SEARCH_CHARS: usize = 32;

/// Make a search term safe to log.
///
/// Control characters (including newlines) become `?`, and anything past
/// [`MAX_LOGGED_SEARCH_CHARS`] characters is replaced with `...`.
///
/// # Examples
/// ```ignore
/// assert_eq!(sanitize_search_term("rust"), "rust");
/// assert_eq!(sanitize_search_term("a\nb"), "a?b");
/// ```
pub fn sanitize_search_term(term: &str) -> String {
    let mut sanitized: String = term
        .chars()
        .take(MAX_LOGGED_SEARCH_CHARS)
        .map(|c| if c.is_control() { '?' } else { c })
        .collect();

    if term.chars().count() > MAX_LOGGED_SEARCH_CHARS {
        sanitized.push_str("...");
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_term_is_unchanged() {
        assert_eq!(sanitize_search_term("rust"), "rust");
        assert_eq!(sanitize_search_term(""), "");
    }

    #[test]
    fn test_control_characters_are_replaced() {
        assert_eq!(sanitize_search_term("a\nb\r\tc"), "a?b??c");
    }

    #[test]
    fn test_long_term_is_truncated() {
        let term = "x".repeat(40);
        assert_eq!(sanitize_search_term(&term), format!("{}...", "x".repeat(32)));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let term = "é".repeat(33);
        assert_eq!(sanitize_search_term(&term), format!("{}...", "é".repeat(32)));
    }
}
