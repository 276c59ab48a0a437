/*!
 * Removal of low-information filler words.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::collapse_whitespace;

/// Words and short phrases eligible for removal
pub const FILLER_PHRASES: &[&str] = &[
    "basically",
    "essentially",
    "actually",
    "literally",
    "kind of",
    "sort of",
    "you know",
    "just",
    "like",
];

static FILLER_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = FILLER_PHRASES
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({})\b", alternation)).expect("Invalid filler regex")
});

/// Strip whole-word fillers, then collapse whitespace and trim.
pub fn remove_fillers(text: &str) -> String {
    let stripped = FILLER_REGEX.replace_all(text, "");
    collapse_whitespace(&stripped)
}
