//! Pairwise word co-occurrence within the selected items.
//!
//! probability(a, b) = items containing both a and b / selected items
//!
//! The raw fraction is used directly: both terms are small integers, so the
//! quotient cannot underflow the way the ratio's probabilities can.

use tagcloud_core::types::collections::FxHashMap;

use crate::scoring::FrequencyTable;

/// A word pair that co-occurs in at least one item.
///
/// `first` and `second` index into [`CooccurrenceIndex::words`], with
/// `words[first] < words[second]` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordPair {
    pub first: usize,
    pub second: usize,
    pub count: u32,
    pub probability: f64,
}

/// Vocabulary plus every co-occurring pair.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceIndex {
    words: Vec<String>,
    positions: FxHashMap<String, usize>,
    pairs: Vec<WordPair>,
    item_count: usize,
}

impl CooccurrenceIndex {
    /// Build from a selected frequency table's per-item token sets.
    pub fn from_table(table: &FrequencyTable) -> Self {
        let words: Vec<String> = table.words().to_vec();
        let positions: FxHashMap<String, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        let mut counts: FxHashMap<(usize, usize), u32> = FxHashMap::default();
        for item in table.item_tokens() {
            let ids: Vec<usize> = item
                .tokens
                .iter()
                .filter_map(|t| positions.get(t).copied())
                .collect();
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    let key = if words[a] < words[b] { (a, b) } else { (b, a) };
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
        }

        let item_count = table.item_count();
        let mut pairs: Vec<WordPair> = counts
            .into_iter()
            .map(|((first, second), count)| WordPair {
                first,
                second,
                count,
                probability: count as f64 / item_count as f64,
            })
            .collect();
        // Stable, hash-independent order.
        pairs.sort_by(|x, y| {
            (&words[x.first], &words[x.second]).cmp(&(&words[y.first], &words[y.second]))
        });

        Self {
            words,
            positions,
            pairs,
            item_count,
        }
    }

    /// Vocabulary in first-encounter order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Co-occurring pairs, sorted lexicographically by word pair.
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    /// Co-occurrence probability of two words, `None` if they never co-occur.
    pub fn probability(&self, a: &str, b: &str) -> Option<f64> {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        let first = self.position(a)?;
        let second = self.position(b)?;
        self.pairs
            .iter()
            .find(|p| p.first == first && p.second == second)
            .map(|p| p.probability)
    }

    /// Highest pair probability present, `None` if no pair co-occurs.
    pub fn max_probability(&self) -> Option<f64> {
        self.pairs.iter().map(|p| p.probability).reduce(f64::max)
    }
}
