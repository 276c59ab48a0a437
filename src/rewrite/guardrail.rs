/*!
 * Guardrail prefix for ambiguous or overloaded terms.
 *
 * Words like "modular" or "bridge" mean different things to different
 * communities. When one appears in the input, the first sentence is hedged
 * with a fixed prefix.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::glossary::whole_word_pattern;
use super::options::SentencePass;

/// Hedge prepended to the first sentence
pub const GUARDRAIL_PREFIX: &str = "Typically, this means ";

/// Terms that trigger the guardrail; overlaps the glossary on purpose
pub const AMBIGUOUS_TERMS: &[&str] = &[
    "modular",
    "agent",
    "ai",
    "rollup",
    "intent",
    "account abstraction",
    "restaking",
    "staking",
    "oracle",
    "bridge",
    "l2",
    "layer 2",
    "layer-2",
    "sequencer",
];

pub(crate) static AMBIGUOUS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    AMBIGUOUS_TERMS.iter().map(|term| whole_word_pattern(term)).collect()
});

/// Whether the text mentions any ambiguous term as a whole word.
pub fn has_ambiguous_term(text: &str) -> bool {
    AMBIGUOUS_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Prefix the first sentence with the hedge when `enabled`.
///
/// The first character of the original sentence is lower-cased; later
/// sentences are untouched. An empty sequence is returned as-is.
pub fn apply_guardrail_prefix(sentences: Vec<String>, enabled: bool) -> SentencePass {
    if !enabled || sentences.is_empty() {
        return SentencePass::skipped(sentences);
    }

    let mut sentences = sentences;
    let first = &sentences[0];
    let mut chars = first.chars();
    let guarded = match chars.next() {
        Some(initial) => format!("{}{}{}", GUARDRAIL_PREFIX, initial.to_lowercase(), chars.as_str()),
        None => GUARDRAIL_PREFIX.to_string(),
    };
    sentences[0] = guarded;

    SentencePass::applied(sentences)
}
