//! Tokenizer: raw attribute text to a deduplicated, ordered token set.
//!
//! 1. Lower-case the whole input.
//! 2. Replace ASCII punctuation other than `'` and `-` with a space.
//! 3. Replace every configured delimiter with a space.
//! 4. Split on whitespace, keeping the first occurrence of each token.

use aho_corasick::{AhoCorasick, MatchKind};
use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::collections::FxHashSet;

use super::delimiters::WordDelimiters;

/// A tokenizer bound to one snapshot of the delimiter set.
///
/// Building the delimiter automaton is the expensive part, so a computation
/// builds one `Tokenizer` and reuses it for every item.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    matcher: Option<AhoCorasick>,
}

impl Tokenizer {
    pub fn new(delimiters: &WordDelimiters) -> CloudResult<Self> {
        if delimiters.is_empty() {
            return Ok(Self { matcher: None });
        }
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(delimiters.entries())
            .map_err(|e| CloudError::invalid("delimiters", e.to_string()))?;
        Ok(Self {
            matcher: Some(matcher),
        })
    }

    /// Tokenize one text field into distinct tokens, in first-seen order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut tokens = Vec::new();
        self.tokenize_into(text, &mut seen, &mut tokens);
        tokens
    }

    /// Tokenize `text`, appending tokens not yet in `seen`.
    ///
    /// Used to union several fields of one item into a single token set.
    pub fn tokenize_into(&self, text: &str, seen: &mut FxHashSet<String>, out: &mut Vec<String>) {
        let stripped: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_separator_punctuation(c) { ' ' } else { c })
            .collect();

        let split = match &self.matcher {
            Some(matcher) => {
                let spaces = vec![" "; matcher.patterns_len()];
                matcher.replace_all(&stripped, &spaces)
            }
            None => stripped,
        };

        for token in split.split_whitespace() {
            if !seen.contains(token) {
                seen.insert(token.to_string());
                out.push(token.to_string());
            }
        }
    }
}

/// Punctuation that separates words. Apostrophes and hyphens stay inside
/// tokens ("don't", "x-ray").
fn is_separator_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() && c != '\'' && c != '-'
}

/// One-shot tokenization with a fresh delimiter automaton.
pub fn tokenize(text: &str, delimiters: &WordDelimiters) -> CloudResult<Vec<String>> {
    Ok(Tokenizer::new(delimiters)?.tokenize(text))
}
