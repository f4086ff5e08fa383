// src/resolve/column.rs

use crate::resolve::dates;
use crate::table::normalize_text;

/// Find the column a date label refers to: the first header whose
/// normalized text contains any candidate spelling of the label. Returns
/// `None` when no header matches (including the empty header list).
pub fn resolve_column(headers: &[String], date_label: &str) -> Option<usize> {
    let cands = dates::candidates(date_label);
    headers.iter().position(|h| {
        let hx = normalize_text(h);
        cands.iter().any(|c| hx.contains(c.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_exact_header() {
        let h = headers(&["区分", "11/1", "11/2"]);
        assert_eq!(resolve_column(&h, "11/1"), Some(1));
    }

    #[test]
    fn matches_zero_padded_header_from_unpadded_label() {
        let h = headers(&["区分", "11/01", "11/02"]);
        assert_eq!(resolve_column(&h, "11/1"), Some(1));
    }

    #[test]
    fn matches_header_with_day_of_week_suffix() {
        let h = headers(&["区分", "11/1\n(土)", "11/2\n(日)"]);
        assert_eq!(resolve_column(&h, "11/2"), Some(2));
    }

    #[test]
    fn first_match_wins() {
        // Both headers contain "11/1"; the lower index is returned.
        let h = headers(&["11/1", "11/1(再掲)"]);
        assert_eq!(resolve_column(&h, "11/1"), Some(0));
    }

    #[test]
    fn no_match_is_none() {
        let h = headers(&["区分", "11/1", "11/2"]);
        assert_eq!(resolve_column(&h, "11/3"), None);
    }

    #[test]
    fn empty_headers_is_none() {
        assert_eq!(resolve_column(&[], "11/1"), None);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let h = headers(&["区分", "11/1", "11/2"]);
        let first = resolve_column(&h, "11/2");
        assert_eq!(resolve_column(&h, "11/2"), first);
    }
}
