/*!
 * Sentence segmentation and line wrapping.
 *
 * Sentences end at `.`, `!` or `?` followed by whitespace; the punctuation
 * stays with the sentence. Long sentences can be wrapped to a character
 * budget, preferring comma and "and" boundaries and falling back to word
 * boundaries. Words are never split.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::filler::remove_fillers;
use super::options::ReadingLevel;

/// Line budget for plain output at the simple reading level
pub const PLAIN_LINE_LIMIT: usize = 90;

/// Line budget for thread (short-post) output
pub const THREAD_LINE_LIMIT: usize = 80;

/// Sentence-ending punctuation followed by whitespace
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]\s+").expect("Invalid sentence boundary regex")
});

/// Clause boundaries used when wrapping: a comma or a standalone "and"
static CLAUSE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),\s+|\s+and\s+").expect("Invalid clause boundary regex")
});

/// Length in characters, which is what every budget is measured in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` on every match of `boundary`.
///
/// A match that starts with `.`, `!` or `?` keeps that character on the
/// left-hand piece; every other matched character is dropped.
pub(crate) fn split_keeping_terminators<'a>(text: &'a str, boundary: &Regex) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for found in boundary.find_iter(text) {
        let cut = if found.as_str().starts_with(['.', '!', '?']) {
            found.start() + 1
        } else {
            found.start()
        };
        pieces.push(&text[start..cut]);
        start = found.end();
    }
    pieces.push(&text[start..]);

    pieces
}

/// Split text into trimmed, non-empty sentences.
///
/// Falls back to the whole text as a single sentence, so the result is never
/// empty.
pub fn split_sentences(text: &str) -> Vec<String> {
    let sentences: Vec<String> = split_keeping_terminators(text, &SENTENCE_BOUNDARY)
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect();

    if sentences.is_empty() {
        vec![text.to_string()]
    } else {
        sentences
    }
}

/// Break a sentence into lines of at most `limit` characters.
///
/// Clauses separated by a comma or "and" are greedily packed back together
/// with `", "` as the joiner. A clause that is still too long is wrapped on
/// whitespace. A single word longer than `limit` gets a line of its own.
pub fn break_long_sentence(sentence: &str, limit: usize) -> Vec<String> {
    if char_len(sentence) <= limit {
        return vec![sentence.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for part in CLAUSE_BOUNDARY.split(sentence) {
        let candidate = if current.is_empty() {
            part.to_string()
        } else {
            format!("{}, {}", current, part)
        };

        if char_len(&candidate) > limit {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current = part.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    let mut wrapped = Vec::new();
    for chunk in chunks {
        if char_len(&chunk) <= limit {
            wrapped.push(chunk);
        } else {
            wrap_words(&chunk, limit, &mut wrapped);
        }
    }

    wrapped
}

/// Greedy word wrap of a single chunk into `lines`.
fn wrap_words(chunk: &str, limit: usize, lines: &mut Vec<String>) {
    let mut line = String::new();

    for word in chunk.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        if char_len(&line) + 1 + char_len(word) > limit {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
}

/// Strip fillers, segment, and wrap when the reading level asks for it.
pub fn simplify_text(text: &str, level: ReadingLevel) -> Vec<String> {
    let cleaned = remove_fillers(text);
    let sentences = split_sentences(&cleaned);

    match level {
        ReadingLevel::Normal => sentences,
        ReadingLevel::Simple => sentences
            .iter()
            .flat_map(|sentence| break_long_sentence(sentence, PLAIN_LINE_LIMIT))
            .collect(),
    }
}
