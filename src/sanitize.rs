use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Characters rejected by common filesystems, plus a leading or trailing dot.
static INVALID_FILENAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|]|\.$|^\."#).unwrap());

/// Turns a page title into a filename by replacing disallowed characters with
/// `replacement` and truncating the result to `max_length` characters.
///
/// The result is not checked against the filesystem: two titles can still map
/// to the same name, and the later write overwrites the earlier one.
pub fn make_valid_filename(title: &str, replacement: &str, max_length: usize) -> String {
    let replaced = INVALID_FILENAME_REGEX.replace_all(title, NoExpand(replacement));
    truncate_chars(&replaced, max_length).to_string()
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
