/*!
 * Input normalization.
 *
 * Canonicalizes quote characters and whitespace so that every later pass
 * can rely on straight quotes and single spaces.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of whitespace, newlines and tabs included
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Normalize raw input text.
///
/// Curly quotes become straight quotes, whitespace runs collapse to a single
/// space and the result is trimmed. Total over all inputs.
pub fn normalize_text(text: &str) -> String {
    let straightened: String = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();

    collapse_whitespace(&straightened)
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
