/*!
 * Slang and idiom rewriting.
 *
 * An ordered list of case-insensitive rewrites. Each rule runs once over the
 * whole text and sees the output of every rule before it, so the order of
 * `REWRITE_RULES` is part of the behavior.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// A single pattern and its literal replacement.
#[derive(Debug)]
pub struct RewriteRule {
    /// Compiled case-insensitive pattern
    pub pattern: Regex,
    /// Literal replacement text (no capture expansion)
    pub replacement: &'static str,
}

/// Rule table as (pattern, replacement) source pairs.
const RULE_SOURCES: &[(&str, &str)] = &[
    (
        r"zk-native execution layer with parallelized prover architecture",
        "a blockchain designed to process many private transactions at once. It does this by running proofs in parallel instead of one-by-one.",
    ),
    (r"gm\b", "good morning"),
    (r"ngmi\b", "not going to make it"),
    (r"wagmi\b", "we are going to make it"),
    (r"dyor\b", "do your own research"),
    (r"fomo\b", "fear of missing out"),
    (r"fud\b", "fear, uncertainty, and doubt"),
    (r"ape in\b", "buy quickly without much research"),
    (r"paper hands", "selling too early"),
    (r"diamond hands", "holding through volatility"),
    (r"rekt", "lost a lot of money"),
    (r"wen\b", "when"),
    (r"airdrop hunting", "chasing free token giveaways"),
    (r"blue chip", "large, established project"),
    (r#""?to the moon"?"#, "expecting a huge price jump"),
    (r"bagholder", "someone holding after a big drop"),
];

/// Compiled rule table, in application order.
pub static REWRITE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    RULE_SOURCES
        .iter()
        .map(|(pattern, replacement)| RewriteRule {
            pattern: Regex::new(&format!("(?i){}", pattern)).expect("Invalid rewrite rule regex"),
            replacement,
        })
        .collect()
});

/// Apply every rewrite rule in order.
pub fn apply_patterns(text: &str) -> String {
    REWRITE_RULES.iter().fold(text.to_string(), |current, rule| {
        if !rule.pattern.is_match(&current) {
            return current;
        }
        trace!("Rewrite: '{}' -> '{}'", rule.pattern.as_str(), rule.replacement);
        rule.pattern
            .replace_all(&current, NoExpand(rule.replacement))
            .into_owned()
    })
}
