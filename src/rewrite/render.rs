/*!
 * Output renderers for the three variants.
 *
 * - Plain: sentences joined with single spaces
 * - Thread: one short statement per line, blank line between statements
 * - Newbie: plain text plus up to two beginner tips
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::segment::{break_long_sentence, split_keeping_terminators, THREAD_LINE_LIMIT};

/// Separator between thread lines and between newbie blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Tip used when fewer than two topic cues match
pub const GENERIC_TIP: &str = "If something feels unclear, start small and learn as you go.";

/// Most tips appended to the newbie variant
pub const MAX_TIPS: usize = 2;

/// Topic cues and the tip each one contributes, in priority order.
/// Cues are plain substrings of the lower-cased text.
pub const NEWBIE_TIPS: &[(&[&str], &str)] = &[
    (&["gas", "fee"], "Why it matters: small fees add up, so plan your steps."),
    (&["risk", "rug pull", "scam"], "Safety tip: double-check sources before you act."),
    (&["volatility", "price"], "Prices can move fast, so size your risk accordingly."),
    (&["bridge"], "Bridging can take time and extra fees, so be patient."),
];

/// Sentence ends plus semicolon, colon and comma boundaries
static THREAD_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]\s+|[;:,]\s+").expect("Invalid thread boundary regex")
});

/// Join sentences into a paragraph.
pub fn render_plain(sentences: &[String]) -> String {
    sentences.join(" ")
}

/// Render sentences as a short-post thread.
///
/// Every sentence is cut at clause boundaries, each fragment is wrapped to
/// the thread budget, and trailing sentence punctuation is dropped from each
/// line.
pub fn render_thread(sentences: &[String]) -> String {
    sentences
        .iter()
        .flat_map(|sentence| {
            split_keeping_terminators(sentence, &THREAD_BOUNDARY)
                .into_iter()
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .flat_map(|piece| break_long_sentence(piece, THREAD_LINE_LIMIT))
                .collect::<Vec<_>>()
        })
        .map(|line| line.trim_end_matches(&['.', '!', '?'][..]).to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Pick the tips for a plain rendering; always one or two.
pub fn build_newbie_tips(plain: &str) -> Vec<&'static str> {
    let lower = plain.to_lowercase();

    let mut tips: Vec<&'static str> = NEWBIE_TIPS
        .iter()
        .filter(|(cues, _)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(_, tip)| *tip)
        .collect();

    if tips.len() < MAX_TIPS {
        tips.push(GENERIC_TIP);
    }
    tips.truncate(MAX_TIPS);

    tips
}

/// Plain rendering followed by its tips, blank-line separated.
pub fn render_newbie(plain: &str) -> String {
    let mut blocks: Vec<&str> = vec![plain];
    blocks.extend(build_newbie_tips(plain));
    blocks.join(BLOCK_SEPARATOR)
}
