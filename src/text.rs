//! Transcript tokenization and segmentation
//!
//! Pure functions from a transcript string to word tokens and sentence
//! segments. Word tokens are case-folded alphanumeric runs; sentences are
//! split on terminating punctuation with empty segments discarded. No side
//! effects, no state.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").unwrap())
}

/// Tokenized view of a transcript.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    /// Case-folded word tokens, punctuation stripped, in order.
    pub words: Vec<String>,
    /// Trimmed sentence segments, empties discarded.
    pub sentences: Vec<String>,
    /// Count of distinct word tokens (case-insensitive).
    pub unique_words: usize,
}

impl Tokens {
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Tokenize a transcript into words and sentences.
///
/// An empty or whitespace-only transcript yields zero words and zero
/// sentences (not one).
pub fn tokenize(text: &str) -> Tokens {
    let words = words(text);
    let unique: FxHashSet<&str> = words.iter().map(String::as_str).collect();
    let unique_words = unique.len();
    Tokens {
        words,
        sentences: sentences(text),
        unique_words,
    }
}

/// Case-folded word tokens.
pub fn words(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    word_pattern()
        .find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sentence segments, split on `.`, `!`, `?`.
pub fn sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Greedy word-wrap for report display.
///
/// Whitespace runs collapse to single spaces; words longer than `width` get
/// a line of their own rather than being split.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let wlen = word.chars().count();
        if line_len == 0 {
            out.push_str(word);
            line_len = wlen;
        } else if line_len + 1 + wlen <= width {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + wlen;
        } else {
            out.push('\n');
            out.push_str(word);
            line_len = wlen;
        }
    }
    out
}
