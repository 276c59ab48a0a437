/*!
 * Glossary of domain jargon and the substitution engine that applies it.
 *
 * Terms are matched case-insensitively on whole-word boundaries and scanned
 * longest-first, so "gas fee" is consumed before "gas" gets a chance to
 * match and leave a dangling "fee".
 *
 * # Known limitation
 *
 * Each term scans the text produced by all longer terms before it, definitions
 * included. A definition that happens to contain a shorter glossary term would
 * be substituted a second time: the "seed phrase" definition ends in "wallet",
 * which is scanned later and replaced inside it. The scan order is kept as-is
 * for output compatibility; guarding substituted regions would change existing
 * results.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Opening token of an internal highlight span
pub const HIGHLIGHT_OPEN: &str = "[[H]]";

/// Closing token of an internal highlight span
pub const HIGHLIGHT_CLOSE: &str = "[[/H]]";

/// A jargon term and its one-sentence plain-language definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// Term or multi-word phrase, lowercase
    pub term: &'static str,
    /// Plain-language replacement
    pub definition: &'static str,
}

const fn entry(term: &'static str, definition: &'static str) -> GlossaryEntry {
    GlossaryEntry { term, definition }
}

/// The fixed glossary, in table order (ties in scan order keep this order).
pub static GLOSSARY: &[GlossaryEntry] = &[
    entry("blockchain", "a shared public ledger that records transactions"),
    entry("block", "a batch of transactions grouped together"),
    entry("hash", "a unique digital fingerprint of data"),
    entry("node", "a computer that runs the network software"),
    entry("wallet", "an app or device that stores your crypto access keys"),
    entry("seed phrase", "a secret list of words that recovers a wallet"),
    entry("private key", "the secret code that controls your funds"),
    entry("public key", "the shareable code that receives funds"),
    entry("smart contract", "self-running code that enforces an agreement"),
    entry("token", "a digital asset issued on a blockchain"),
    entry("coin", "a native asset of a blockchain"),
    entry("layer 2", "a scaling network built on top of a main chain"),
    entry("execution layer", "the part of a chain where transactions are processed"),
    entry("rollup", "a layer 2 that bundles transactions to save fees"),
    entry("shared sequencer", "a coordinator that orders transactions for multiple rollups"),
    entry("sequencer", "a service that orders and batches transactions"),
    entry("mainnet", "the live public blockchain"),
    entry("testnet", "a practice blockchain for testing"),
    entry("gas", "the fee paid to process a transaction"),
    entry("gas fee", "the fee paid to process a transaction"),
    entry("staking", "locking tokens to help run the network"),
    entry("validator", "a participant that confirms transactions"),
    entry("validator set", "the group of validators running the network"),
    entry("proof of stake", "a method where validators lock tokens to secure the chain"),
    entry("proof of work", "a method where miners use computing power to secure the chain"),
    entry("miner", "a participant who secures the chain with computing power"),
    entry("airdrop", "free tokens sent to users"),
    entry("liquidity pool", "a shared pool of tokens used for trading"),
    entry("liquidity", "how easy it is to buy or sell without big price moves"),
    entry("yield farming", "moving funds between pools to earn rewards"),
    entry("dex", "a decentralized exchange with no central operator"),
    entry("cex", "a centralized exchange run by a company"),
    entry("bridge", "a tool that moves assets between blockchains"),
    entry("oracle", "a service that brings real-world data on-chain"),
    entry("rug pull", "a scam where creators abandon a project and take funds"),
    entry("account abstraction", "smart contracts that make wallets easier to use"),
    entry("data availability layer", "a network that stores transaction data for verification"),
    entry("mint", "to create new tokens"),
    entry("burn", "to permanently remove tokens"),
    entry("faucet", "a site that gives small test tokens"),
    entry("whale", "a holder with a very large balance"),
    entry("dao", "a group that makes decisions using on-chain votes"),
    entry("mev", "extra value that can be extracted by reordering transactions"),
    entry("slippage", "the gap between expected and actual trade price"),
    entry("market cap", "price multiplied by total supply"),
    entry("volatility", "how fast the price moves up and down"),
    entry("finality", "the point when a transaction cannot be reversed"),
    entry("modular", "designed as separate parts that work together"),
    entry("permissionless", "open to anyone without approval"),
];

/// Build a case-insensitive, whole-word matcher for a literal term.
pub fn whole_word_pattern(term: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
        .expect("Escaped glossary term must form a valid regex")
}

/// A glossary entry with its compiled matcher.
struct CompiledTerm {
    entry: &'static GlossaryEntry,
    pattern: Regex,
}

/// Glossary in scan order: descending character length, stable on ties.
static SCAN_ORDER: Lazy<Vec<CompiledTerm>> = Lazy::new(|| {
    let mut entries: Vec<&'static GlossaryEntry> = GLOSSARY.iter().collect();
    entries.sort_by(|a, b| b.term.chars().count().cmp(&a.term.chars().count()));
    entries
        .into_iter()
        .map(|entry| CompiledTerm {
            entry,
            pattern: whole_word_pattern(entry.term),
        })
        .collect()
});

/// Glossary matchers in table order, used for concept detection.
pub(crate) static TABLE_ORDER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    GLOSSARY.iter().map(|entry| whole_word_pattern(entry.term)).collect()
});

/// How matched glossary terms are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubstitutionMode {
    /// Leave matched terms in place instead of substituting definitions
    pub keep_terms: bool,
    /// Wrap substituted definitions in highlight markers
    pub highlight: bool,
}

impl SubstitutionMode {
    /// Substitute definitions, optionally highlighted.
    pub fn replace(highlight: bool) -> Self {
        Self { keep_terms: false, highlight }
    }

    /// Keep every original term untouched.
    pub fn keep() -> Self {
        Self { keep_terms: true, highlight: false }
    }
}

/// Wrap text in highlight markers.
pub fn mark_text(text: &str) -> String {
    format!("{}{}{}", HIGHLIGHT_OPEN, text, HIGHLIGHT_CLOSE)
}

/// Look up the definition of a term, case-insensitively.
pub fn lookup(term: &str) -> Option<&'static str> {
    let needle = term.trim().to_lowercase();
    GLOSSARY
        .iter()
        .find(|entry| entry.term == needle)
        .map(|entry| entry.definition)
}

/// Terms in the order the substitution engine scans them.
pub fn scan_order() -> Vec<&'static str> {
    SCAN_ORDER.iter().map(|compiled| compiled.entry.term).collect()
}

/// Apply the glossary to a text.
///
/// Every term is processed in scan order against the output of the previous
/// terms. With `keep_terms` the text comes back unchanged.
pub fn apply_glossary(text: &str, mode: SubstitutionMode) -> String {
    let mut output = text.to_string();

    for compiled in SCAN_ORDER.iter() {
        if mode.keep_terms || !compiled.pattern.is_match(&output) {
            continue;
        }

        let replacement = if mode.highlight {
            mark_text(compiled.entry.definition)
        } else {
            compiled.entry.definition.to_string()
        };

        trace!("Glossary: substituting '{}'", compiled.entry.term);
        output = compiled
            .pattern
            .replace_all(&output, NoExpand(&replacement))
            .into_owned();
    }

    output
}
