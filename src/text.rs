//! Free-text cleanup for advisory details.

use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r\n?|\n){2,}").expect("valid blank line pattern"));

/// Collapses every run of two or more line breaks into a single blank line.
///
/// `\n`, `\r\n` and bare `\r` all count as line breaks. Text without such a
/// run is returned unchanged.
///
/// # Example
///
/// ```
/// use osv_viewer::text::normalize_details;
///
/// assert_eq!(normalize_details("a\r\n\r\n\r\nb"), "a\n\nb");
/// ```
pub fn normalize_details(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n\n").into_owned()
}
