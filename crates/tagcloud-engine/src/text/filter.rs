//! WordFilter: the set of tokens excluded from every count.

use tagcloud_core::config::TextConfig;
use tagcloud_core::types::collections::FxHashSet;
use tagcloud_core::types::next_version;

use super::stop_words::STOP_WORDS;

/// Insertion-ordered, case-insensitive exclusion set.
///
/// Every effective mutation bumps `version`, which invalidates the frequency,
/// ratio, and cluster caches of every cloud that shares this filter.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    version: u64,
}

impl WordFilter {
    /// An empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter preloaded with the built-in English stop words.
    pub fn with_stop_words() -> Self {
        let mut filter = Self::new();
        for word in STOP_WORDS {
            filter.add(word);
        }
        filter
    }

    /// Filter seeded from the text config: stop words if enabled, then extras.
    pub fn from_config(config: &TextConfig) -> Self {
        let mut filter = if config.effective_use_stop_words() {
            Self::with_stop_words()
        } else {
            Self::new()
        };
        for word in &config.extra_stop_words {
            filter.add(word);
        }
        filter
    }

    /// Add a word. Returns `true` if it was newly added.
    /// Blank words are ignored.
    pub fn add(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if normalized.is_empty() || !self.lookup.insert(normalized.clone()) {
            return false;
        }
        self.words.push(normalized);
        self.version = next_version();
        true
    }

    /// Remove a word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if !self.lookup.remove(&normalized) {
            return false;
        }
        self.words.retain(|w| *w != normalized);
        self.version = next_version();
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        // Tokens coming out of the tokenizer are already lower-case.
        self.lookup.contains(word) || self.lookup.contains(&normalize(word))
    }

    /// Filtered words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let mut filter = WordFilter::new();
        assert!(filter.add("Node1"));
        assert!(filter.contains("node1"));
        assert!(filter.contains("NODE1"));
        assert_eq!(filter.words(), &["node1".to_string()]);
    }

    #[test]
    fn duplicate_add_and_absent_remove_are_noops() {
        let mut filter = WordFilter::new();
        filter.add("cancer");
        let v = filter.version();
        assert!(!filter.add("CANCER"));
        assert!(!filter.remove("colon"));
        assert_eq!(filter.version(), v);
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn insertion_order_survives_removal() {
        let mut filter = WordFilter::new();
        for w in ["gamma", "alpha", "beta"] {
            filter.add(w);
        }
        filter.remove("alpha");
        assert_eq!(filter.words(), &["gamma".to_string(), "beta".to_string()]);
    }

    #[test]
    fn config_seeds_stop_words_and_extras() {
        let config = TextConfig {
            use_stop_words: Some(true),
            extra_stop_words: vec!["Protein".into()],
            delimiters: vec![],
        };
        let filter = WordFilter::from_config(&config);
        assert!(filter.contains("the"));
        assert!(filter.contains("protein"));

        let bare = WordFilter::from_config(&TextConfig {
            use_stop_words: Some(false),
            ..Default::default()
        });
        assert!(bare.is_empty());
    }
}
