/*!
 * Two-layer explanations.
 *
 * Dense input that packs several technical concepts into one sentence is
 * expanded into a claim followed by a mechanism ("It works by ...").
 * Split strategies form an ordered chain; the first one that applies wins
 * and the last one always applies.
 */

use std::collections::HashSet;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::glossary::TABLE_ORDER_PATTERNS;
use super::guardrail::AMBIGUOUS_PATTERNS;
use super::options::SentencePass;

/// Distinct technical concepts needed before the explainer kicks in
pub const TWO_LAYER_CONCEPT_THRESHOLD: usize = 2;

/// Lead-in of every mechanism sentence
const MECHANISM_LEAD: &str = "It works by";

/// Mechanism used when no split point exists
const FALLBACK_MECHANISM: &str = "It works by combining the technical parts into a system.";

/// A verb that separates a claim from its mechanism
struct VerbCue {
    pattern: Regex,
    gerund: &'static str,
}

fn verb_cue(verb: &str, gerund: &'static str) -> VerbCue {
    VerbCue {
        pattern: Regex::new(&format!(r"(?i)\s+{}\s+", verb)).expect("Invalid verb cue regex"),
        gerund,
    }
}

/// Verb cues in priority order
static VERB_CUES: Lazy<Vec<VerbCue>> = Lazy::new(|| {
    vec![
        verb_cue("causes", "causing"),
        verb_cue("improves", "improving"),
        verb_cue("secures", "securing"),
        verb_cue("uses", "using"),
    ]
});

static WITH_CUE: Lazy<VerbCue> = Lazy::new(|| verb_cue("with", "using"));

static CLAUSE_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i);\s+|,\s+but\s+|,\s+and\s+|\s+because\s+").expect("Invalid clause cue regex")
});

/// Strategy that produced a two-layer explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoLayerStrategy {
    /// Split on "causes", "improves", "secures" or "uses"
    VerbCue,
    /// Split on "with"
    WithClause,
    /// Split on a semicolon, ", but", ", and" or "because"
    ClauseBreak,
    /// Generic mechanism sentence appended
    Fallback,
}

type SplitFn = fn(&str) -> Option<Vec<String>>;

/// The strategy chain, evaluated in order
const STRATEGIES: &[(TwoLayerStrategy, SplitFn)] = &[
    (TwoLayerStrategy::VerbCue, split_on_verb_cue),
    (TwoLayerStrategy::WithClause, split_on_with),
    (TwoLayerStrategy::ClauseBreak, split_on_clause),
    (TwoLayerStrategy::Fallback, append_fallback),
];

/// Count distinct technical terms in the text.
///
/// Every glossary term and ambiguous term is searched once; the first match
/// of each, lower-cased, goes into a set.
pub fn count_technical_concepts(text: &str) -> usize {
    let unique: HashSet<String> = TABLE_ORDER_PATTERNS
        .iter()
        .chain(AMBIGUOUS_PATTERNS.iter())
        .filter_map(|pattern| pattern.find(text))
        .map(|found| found.as_str().to_lowercase())
        .collect();

    unique.len()
}

/// Replace an optional trailing `.`, `!` or `?` with a single period.
fn with_period(text: &str) -> String {
    let body = text
        .strip_suffix(|c: char| matches!(c, '.' | '!' | '?'))
        .unwrap_or(text);
    format!("{}.", body)
}

/// Claim and mechanism around a cue; both halves must be non-empty.
fn split_around(sentence: &str, cue: &VerbCue) -> Option<Vec<String>> {
    if !cue.pattern.is_match(sentence) {
        return None;
    }

    let mut pieces = cue.pattern.split(sentence);
    let subject = pieces.next().filter(|piece| !piece.is_empty())?;
    let detail = pieces.next().filter(|piece| !piece.is_empty())?;

    Some(vec![
        with_period(subject.trim()),
        format!("{} {} {}", MECHANISM_LEAD, cue.gerund, with_period(detail.trim())),
    ])
}

fn split_on_verb_cue(sentence: &str) -> Option<Vec<String>> {
    VERB_CUES.iter().find_map(|cue| split_around(sentence, cue))
}

fn split_on_with(sentence: &str) -> Option<Vec<String>> {
    split_around(sentence, &WITH_CUE)
}

fn split_on_clause(sentence: &str) -> Option<Vec<String>> {
    let pieces: Vec<&str> = CLAUSE_CUE
        .split(sentence)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect();

    if pieces.len() < 2 {
        return None;
    }

    Some(vec![
        with_period(pieces[0]),
        format!("{} {}", MECHANISM_LEAD, pieces[1]),
    ])
}

fn append_fallback(sentence: &str) -> Option<Vec<String>> {
    Some(vec![with_period(sentence), FALLBACK_MECHANISM.to_string()])
}

/// Expand one sentence into a claim and a mechanism.
pub fn explain_sentence(sentence: &str) -> (TwoLayerStrategy, Vec<String>) {
    STRATEGIES
        .iter()
        .find_map(|(strategy, split)| split(sentence).map(|sentences| (*strategy, sentences)))
        .unwrap_or_else(|| {
            (
                TwoLayerStrategy::Fallback,
                vec![with_period(sentence), FALLBACK_MECHANISM.to_string()],
            )
        })
}

/// Run the explainer over segmented sentences.
///
/// With two or more sentences the structure is already layered, so nothing
/// changes but the pass still counts as applied.
pub fn apply_two_layer_explanation(sentences: Vec<String>, enabled: bool) -> SentencePass {
    if !enabled {
        return SentencePass::skipped(sentences);
    }

    if sentences.len() >= 2 {
        debug!("Two-layer: {} sentences already present", sentences.len());
        return SentencePass::applied(sentences);
    }

    let sentence = sentences.first().map(String::as_str).unwrap_or("");
    let (strategy, layered) = explain_sentence(sentence);
    debug!("Two-layer: expanded with {:?}", strategy);

    SentencePass::applied(layered)
}
