/*!
 * Rule-based jargon rewriting.
 *
 * This module contains the text pipeline that turns jargon into plain
 * language. It is split into several submodules:
 *
 * - `normalize`: Quote and whitespace canonicalization
 * - `glossary`: Glossary table and longest-first term substitution
 * - `patterns`: Ordered slang and idiom rewrites
 * - `filler`: Filler word removal
 * - `segment`: Sentence splitting and line wrapping
 * - `explain`: Two-layer (claim + mechanism) explanations
 * - `guardrail`: Hedging prefix for ambiguous terms
 * - `render`: Plain, thread and newbie renderers
 * - `pipeline`: Entry points tying the passes together
 */

// Re-export main types for easier usage
pub use self::options::{
    QuickOptions, ReadingLevel, SentencePass, TranslateOptions, TranslationMeta, TranslationResult,
};
pub use self::pipeline::{translate, translate_text, Translator, SAMPLE_INPUTS};

// Submodules
pub mod explain;
pub mod filler;
pub mod glossary;
pub mod guardrail;
pub mod normalize;
pub mod options;
pub mod patterns;
pub mod pipeline;
pub mod render;
pub mod segment;
