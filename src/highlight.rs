/*!
 * Highlight rendering for display.
 *
 * Turns the internal `[[H]]...[[/H]]` markers produced by the glossary pass
 * into HTML markup, or strips them when highlighting is off. Input text is
 * HTML-escaped first.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::glossary::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// Either highlight marker token
static MARKER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{}|{}",
        regex::escape(HIGHLIGHT_OPEN),
        regex::escape(HIGHLIGHT_CLOSE)
    ))
    .expect("Invalid highlight marker regex")
});

/// A complete highlight span on a single line, shortest match
static MARKED_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{}(.*?){}",
        regex::escape(HIGHLIGHT_OPEN),
        regex::escape(HIGHLIGHT_CLOSE)
    ))
    .expect("Invalid highlight span regex")
});

/// Markup a highlighted span is rendered as
const MARK_TEMPLATE: &str = r#"<mark class="bg-emerald-300/30 text-emerald-200">${1}</mark>"#;

const LINE_BREAK: &str = "<br />";

/// Escape the characters that are significant in HTML text content.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Remove every highlight marker token.
pub fn strip_highlight_markers(text: &str) -> String {
    MARKER_TOKEN.replace_all(text, "").into_owned()
}

/// Render text for display.
///
/// With `highlight` off, markers are dropped; with it on, marked spans become
/// `<mark>` elements. Newlines become `<br />` in both cases.
pub fn render_highlighted_text(text: &str, highlight: bool) -> String {
    let escaped = escape_html(text);

    let marked = if highlight {
        MARKED_SPAN.replace_all(&escaped, MARK_TEMPLATE).into_owned()
    } else {
        strip_highlight_markers(&escaped)
    };

    marked.replace('\n', LINE_BREAK)
}
