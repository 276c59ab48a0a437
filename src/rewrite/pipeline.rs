/*!
 * The rewrite pipeline and its entry points.
 *
 * One call produces all three variants. Two branches run over the same
 * normalized input and share nothing but the static rule tables:
 *
 * - Thread branch: glossary (caller's `keep_terms`, no highlight), then
 *   slang rewrites, then simplification, explanation and guardrail. Rendered
 *   as a thread with markers stripped.
 * - Plain branch: slang rewrites, then glossary (always substituting,
 *   caller's `highlight`), then the same sentence passes. Rendered as the
 *   plain and newbie variants and the source of `meta`.
 *
 * Concept counting and the guardrail check look at the normalized input
 * before any rewriting.
 */

use log::{debug, trace};

use crate::highlight::strip_highlight_markers;

use super::explain::{apply_two_layer_explanation, count_technical_concepts, TWO_LAYER_CONCEPT_THRESHOLD};
use super::glossary::{apply_glossary, SubstitutionMode};
use super::guardrail::{apply_guardrail_prefix, has_ambiguous_term};
use super::normalize::normalize_text;
use super::options::{QuickOptions, ReadingLevel, TranslateOptions, TranslationMeta, TranslationResult};
use super::patterns::apply_patterns;
use super::render::{render_newbie, render_plain, render_thread};
use super::segment::simplify_text;

/// Sample inputs that exercise each heuristic at least once
pub const SAMPLE_INPUTS: &[&str] = &[
    "ZK-native execution layer with parallelized prover architecture",
    "Modular rollup with shared sequencer design",
    "High MEV environment causes slippage for retail users",
    "Account abstraction improves wallet UX",
    "Data availability layer secures off-chain execution",
    "Permissionless validator set with fast finality",
];

/// Triggers computed once from the normalized input
#[derive(Debug, Clone, Copy)]
struct Triggers {
    two_layer: bool,
    guardrail: bool,
}

/// Sentences after the shared sentence passes, plus which passes fired
struct LayeredSentences {
    sentences: Vec<String>,
    meta: TranslationMeta,
}

/// Jargon translator bound to a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    /// Create a translator with the given options.
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Options this translator runs with.
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Translate one input into all three variants.
    pub fn translate(&self, text: &str) -> TranslationResult {
        let normalized = normalize_text(text);
        let concept_count = count_technical_concepts(&normalized);
        let triggers = Triggers {
            two_layer: concept_count >= TWO_LAYER_CONCEPT_THRESHOLD,
            guardrail: has_ambiguous_term(&normalized),
        };
        debug!(
            "Translating {} chars: {} concepts, guardrail {}",
            normalized.chars().count(),
            concept_count,
            triggers.guardrail
        );

        let x_ready = self.thread_branch(&normalized, triggers);

        let plain_layered = self.plain_branch(&normalized, triggers);
        let plain = render_plain(&plain_layered.sentences);
        let newbie = render_newbie(&plain);

        TranslationResult {
            plain,
            x_ready,
            newbie,
            meta: plain_layered.meta,
        }
    }

    fn thread_branch(&self, normalized: &str, triggers: Triggers) -> String {
        let mode = SubstitutionMode {
            keep_terms: self.options.keep_terms,
            highlight: false,
        };
        let substituted = apply_glossary(normalized, mode);
        let rewritten = apply_patterns(&substituted);
        trace!("Thread branch text: {}", rewritten);

        let layered = layer_sentences(&rewritten, self.options.reading_level, triggers);
        let unmarked: Vec<String> = layered
            .sentences
            .iter()
            .map(|sentence| strip_highlight_markers(sentence))
            .collect();

        render_thread(&unmarked)
    }

    fn plain_branch(&self, normalized: &str, triggers: Triggers) -> LayeredSentences {
        let rewritten = apply_patterns(normalized);
        let substituted = apply_glossary(&rewritten, SubstitutionMode::replace(self.options.highlight));
        trace!("Plain branch text: {}", substituted);

        layer_sentences(&substituted, self.options.reading_level, triggers)
    }
}

/// Simplify, then run the explainer and the guardrail in that order.
fn layer_sentences(text: &str, level: ReadingLevel, triggers: Triggers) -> LayeredSentences {
    let simplified = simplify_text(text, level);
    let explained = apply_two_layer_explanation(simplified, triggers.two_layer);
    let guarded = apply_guardrail_prefix(explained.sentences, triggers.guardrail);

    LayeredSentences {
        sentences: guarded.sentences,
        meta: TranslationMeta {
            used_two_layer: explained.applied,
            used_guardrail: guarded.applied,
        },
    }
}

/// Translate text with explicit options. Total over all inputs.
pub fn translate_text(text: &str, options: &TranslateOptions) -> TranslationResult {
    Translator::new(*options).translate(text)
}

/// Convenience entry point: highlighting is always on.
pub fn translate(text: &str, options: &QuickOptions) -> TranslationResult {
    translate_text(text, &TranslateOptions::from(*options))
}
