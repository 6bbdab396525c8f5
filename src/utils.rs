//! Text helpers shared by the field readers.

use crate::constants::DIGITS;

/// Parse the first whitespace-delimited token as an unsigned integer.
///
/// `"5 min read"` gives `Some(5)`; empty text or a non-numeric first token
/// gives `None`.
pub fn leading_integer(text: &str) -> Option<u64> {
    text.split_whitespace().next()?.parse().ok()
}

/// First run of ASCII digits anywhere in the text.
///
/// Runs too large for `u64` are treated as absent.
pub fn first_digit_run(text: &str) -> Option<u64> {
    DIGITS.find(text)?.as_str().parse().ok()
}

/// Drop `count` leading characters, yielding `""` when the text is shorter.
pub fn drop_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// Join a root-relative href onto `origin`; other hrefs pass through.
///
/// `origin` is expected without a trailing slash.
pub fn absolutize_href(origin: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}
