/*!
 * Options and result types for the rewrite pipeline.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How aggressively long sentences are broken up
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    /// Wrap long sentences to the line budget
    #[default]
    Simple,
    /// Keep sentences whole
    Normal,
}

impl ReadingLevel {
    // @returns: Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReadingLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "normal" => Ok(Self::Normal),
            _ => Err(ConfigError::InvalidReadingLevel(s.to_string())),
        }
    }
}

/// Options accepted by the main translate entry point
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Leave glossary terms in place in the thread variant
    #[serde(default = "default_true")]
    pub keep_terms: bool,

    /// Wrap substituted definitions in highlight markers
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Reading level
    #[serde(default)]
    pub reading_level: ReadingLevel,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            keep_terms: true,
            highlight: true,
            reading_level: ReadingLevel::Simple,
        }
    }
}

impl TranslateOptions {
    /// Create options with every field given explicitly.
    pub fn new(keep_terms: bool, highlight: bool, reading_level: ReadingLevel) -> Self {
        Self { keep_terms, highlight, reading_level }
    }

    /// Set whether glossary terms are kept.
    pub fn with_keep_terms(mut self, keep_terms: bool) -> Self {
        self.keep_terms = keep_terms;
        self
    }

    /// Set whether definitions are highlighted.
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the reading level.
    pub fn with_reading_level(mut self, reading_level: ReadingLevel) -> Self {
        self.reading_level = reading_level;
        self
    }
}

/// Options accepted by the convenience entry point; highlighting is always on
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickOptions {
    /// Reading level
    #[serde(default)]
    pub reading_level: ReadingLevel,

    /// Leave glossary terms in place in the thread variant
    #[serde(default)]
    pub keep_key_terms: bool,
}

impl From<QuickOptions> for TranslateOptions {
    fn from(quick: QuickOptions) -> Self {
        Self {
            keep_terms: quick.keep_key_terms,
            highlight: true,
            reading_level: quick.reading_level,
        }
    }
}

/// Which heuristics fired for an input
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMeta {
    /// The two-layer explanation was triggered
    pub used_two_layer: bool,
    /// The guardrail prefix was applied
    pub used_guardrail: bool,
}

/// The three rendered variants of one input
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Plain-language paragraph
    pub plain: String,
    /// One statement per line, ready for a short-form post
    pub x_ready: String,
    /// Plain text followed by beginner tips
    pub newbie: String,
    /// Heuristic flags
    pub meta: TranslationMeta,
}

/// Output of a sentence-level pass and whether the pass changed anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePass {
    /// Sentences after the pass
    pub sentences: Vec<String>,
    /// Whether the pass was triggered
    pub applied: bool,
}

impl SentencePass {
    /// The pass ran and produced `sentences`
    pub fn applied(sentences: Vec<String>) -> Self {
        Self { sentences, applied: true }
    }

    /// The pass did not trigger; `sentences` are passed through
    pub fn skipped(sentences: Vec<String>) -> Self {
        Self { sentences, applied: false }
    }
}

fn default_true() -> bool {
    true
}
