//! User-configured word delimiters.
//!
//! Delimiters are literal strings treated as extra separators on top of the
//! punctuation and whitespace rules. Text is lower-cased before matching, so
//! delimiters are stored lower-cased as well.

use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::collections::FxHashSet;
use tagcloud_core::types::next_version;

/// Insertion-ordered set of delimiter strings with a mutation version.
#[derive(Debug, Clone, Default)]
pub struct WordDelimiters {
    entries: Vec<String>,
    lookup: FxHashSet<String>,
    version: u64,
}

impl WordDelimiters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, e.g. the `text.delimiters` config entry.
    pub fn from_list<I, S>(delimiters: I) -> CloudResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for d in delimiters {
            set.add(d.as_ref())?;
        }
        Ok(set)
    }

    /// Add a delimiter. Returns `true` if it was not already present.
    /// An empty delimiter is rejected.
    pub fn add(&mut self, delimiter: &str) -> CloudResult<bool> {
        if delimiter.is_empty() {
            return Err(CloudError::invalid("delimiter", "must not be empty"));
        }
        let normalized = delimiter.to_lowercase();
        if !self.lookup.insert(normalized.clone()) {
            return Ok(false);
        }
        self.entries.push(normalized);
        self.version = next_version();
        Ok(true)
    }

    /// Remove a delimiter. Removing an absent delimiter is a no-op.
    pub fn remove(&mut self, delimiter: &str) -> bool {
        let normalized = delimiter.to_lowercase();
        if !self.lookup.remove(&normalized) {
            return false;
        }
        self.entries.retain(|d| *d != normalized);
        self.version = next_version();
        true
    }

    pub fn contains(&self, delimiter: &str) -> bool {
        self.lookup.contains(&delimiter.to_lowercase())
    }

    /// Delimiters in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Bumped on every effective mutation; caches key on it.
    pub fn version(&self) -> u64 {
        self.version
    }
}
