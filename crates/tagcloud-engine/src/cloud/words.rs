//! Cloud output: the ordered word list plus the statistics behind it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tagcloud_core::errors::CloudError;
use tagcloud_core::types::ItemId;

use crate::scoring::{FrequencyTable, RatioTable};

/// One displayed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudWord {
    pub word: String,
    pub font_size: u32,
    /// 0 when the word was never merged into a cluster.
    pub cluster: u32,
    pub selected_count: u32,
}

/// Result of one cloud computation.
#[derive(Debug)]
pub struct CloudOutput {
    /// Sorted by descending font size, ties in first-encounter order.
    pub words: Vec<CloudWord>,
    /// Raw selected counts, for table export and item lookup.
    pub selected: Arc<FrequencyTable>,
    pub ratios: RatioTable,
    pub selected_total: usize,
    pub background_total: usize,
    /// Cluster merges performed, 0 when clustering is off.
    pub merges: usize,
    /// Non-fatal problems met while counting the selection.
    pub warnings: Vec<CloudError>,
}

impl CloudOutput {
    /// Smallest ratio, `None` when no word was scored.
    pub fn min_ratio(&self) -> Option<f64> {
        self.ratios.min()
    }

    /// Largest ratio, `None` when no word was scored.
    pub fn max_ratio(&self) -> Option<f64> {
        self.ratios.max()
    }

    /// Selected items whose text contained `word`.
    pub fn items_containing(&self, word: &str) -> &[ItemId] {
        self.selected.items_containing(&word.to_lowercase())
    }

    pub fn word(&self, word: &str) -> Option<&CloudWord> {
        self.words.iter().find(|w| w.word == word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
