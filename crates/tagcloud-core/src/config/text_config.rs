//! Text handling configuration: stop words and extra delimiters.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Seeds the word filter and delimiter set of every new network scope.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Preload the built-in English stop words. Default: true.
    pub use_stop_words: Option<bool>,
    /// Words excluded in addition to the stop words.
    pub extra_stop_words: Vec<String>,
    /// Literal separators applied after punctuation stripping.
    pub delimiters: Vec<String>,
}

impl TextConfig {
    pub fn effective_use_stop_words(&self) -> bool {
        self.use_stop_words
            .unwrap_or(constants::DEFAULT_USE_STOP_WORDS)
    }
}
