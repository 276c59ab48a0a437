/*!
 * # plainspeak - Jargon to plain language
 *
 * A Rust library that rewrites informal crypto and web3 jargon into
 * plain language using fixed, rule-based passes.
 *
 * ## Features
 *
 * - Three output variants from one input:
 *   - Plain-language paragraph
 *   - Short-post thread, one statement per line
 *   - Beginner version with contextual tips
 * - Longest-first glossary substitution with optional highlighting
 * - Slang and idiom rewrites, filler removal
 * - Reading levels with sentence wrapping
 * - Two-layer (claim + mechanism) explanations for dense input
 * - Hedging for ambiguous terms
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `rewrite`: The text pipeline:
 *   - `rewrite::glossary`: Glossary table and substitution
 *   - `rewrite::patterns`: Slang rewrites
 *   - `rewrite::segment`: Sentence splitting and wrapping
 *   - `rewrite::explain`: Two-layer explanations
 *   - `rewrite::guardrail`: Ambiguous-term hedging
 *   - `rewrite::render`: Output renderers
 *   - `rewrite::pipeline`: Entry points
 * - `highlight`: Display markup for highlighted output
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod highlight;
pub mod rewrite;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError};
pub use highlight::{render_highlighted_text, strip_highlight_markers};
pub use rewrite::{
    translate, translate_text, QuickOptions, ReadingLevel, TranslateOptions, TranslationMeta,
    TranslationResult, Translator,
};
