//! Boundary scanning over decompressed dump text.
//!
//! Pages are located by tag matching rather than XML parsing. Dumps are a flat
//! sequence of `<page>` elements, so the nearest `</page>` after an opening tag
//! always ends the record, and only the title and raw payload are needed.

use crate::config::{PAGE_CLOSE, PAGE_OPEN};
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest span between `<page>` and `</page>`, across newlines.
static PAGE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<page>(.*?)</page>").unwrap());

/// Widest span from the first `<title>` to the last `</title>`.
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<title>(.*)</title>").unwrap());

/// Returns the inner text of every page element in document order, without
/// the delimiting tags.
pub fn find_records(text: &str) -> impl Iterator<Item = &str> {
    PAGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the title of a page, or `None` if it has no `<title>` element.
///
/// Matching is permissive: stray `</title>` text later in the page widens the
/// captured span up to the last occurrence.
pub fn find_title(page: &str) -> Option<&str> {
    TITLE_REGEX
        .captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Restores the `<page>` delimiters around an inner record.
pub fn wrap_page(inner: &str) -> String {
    let mut page = String::with_capacity(PAGE_OPEN.len() + inner.len() + PAGE_CLOSE.len());
    page.push_str(PAGE_OPEN);
    page.push_str(inner);
    page.push_str(PAGE_CLOSE);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_records_in_order() {
        let records: Vec<_> = find_records("<page>A</page>text<page>B</page>").collect();
        assert_eq!(records, vec!["A", "B"]);
    }

    #[test]
    fn no_pages_yields_nothing() {
        assert_eq!(find_records("<mediawiki><siteinfo/></mediawiki>").count(), 0);
        assert_eq!(find_records("").count(), 0);
    }

    #[test]
    fn records_span_newlines() {
        let records: Vec<_> = find_records("<page>\n  line one\n  line two\n</page>").collect();
        assert_eq!(records, vec!["\n  line one\n  line two\n"]);
    }

    #[test]
    fn nested_looking_tag_does_not_merge_records() {
        let text = "<page><title>About <page> tags</title></page>\n<page><title>Next</title></page>";
        let records: Vec<_> = find_records(text).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], "<title>About <page> tags</title>");
        assert_eq!(records[1], "<title>Next</title>");
    }

    #[test]
    fn unterminated_page_is_ignored() {
        let records: Vec<_> = find_records("<page>A</page><page>B").collect();
        assert_eq!(records, vec!["A"]);
    }

    #[test]
    fn finds_title() {
        assert_eq!(
            find_title("<page><title>Hello</title><text>...</text></page>"),
            Some("Hello")
        );
    }

    #[test]
    fn missing_title_is_none() {
        assert_eq!(find_title("<page><id>1</id></page>"), None);
    }

    #[test]
    fn empty_title_is_some_empty() {
        assert_eq!(find_title("<page><title></title></page>"), Some(""));
    }

    #[test]
    fn title_match_extends_to_last_closing_tag() {
        let page = "<page><title>A</title><text>x</title>y</text></page>";
        assert_eq!(find_title(page), Some("A</title><text>x"));
    }

    #[test]
    fn wrap_restores_delimiters() {
        assert_eq!(wrap_page("<title>T</title>"), "<page><title>T</title></page>");
    }
}
