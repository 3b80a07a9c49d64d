//! RatioScorer: weighted over-representation of selected words.
//!
//! ratio(w) = (selected(w) * bg_total^k) / (sel_total * background(w)^k)
//!
//! This is `(selected(w)/sel_total) / (background(w)/bg_total)^k` with the
//! divisions rearranged so that two small probabilities are never divided.

use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::collections::FxHashMap;

use super::frequency::FrequencyTable;

/// Reject a weight factor outside [0, 1] (NaN included).
pub fn validate_weight_factor(weight_factor: f64) -> CloudResult<()> {
    if !(0.0..=1.0).contains(&weight_factor) {
        return Err(CloudError::out_of_range("weight_factor", weight_factor, "[0, 1]"));
    }
    Ok(())
}

/// Per-word ratios plus the running min/max.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioTable {
    ratios: FxHashMap<String, f64>,
    order: Vec<String>,
    min: Option<f64>,
    max: Option<f64>,
}

impl RatioTable {
    fn insert(&mut self, word: &str, ratio: f64) {
        self.min = Some(self.min.map_or(ratio, |m| m.min(ratio)));
        self.max = Some(self.max.map_or(ratio, |m| m.max(ratio)));
        self.order.push(word.to_string());
        self.ratios.insert(word.to_string(), ratio);
    }

    /// Ratio for `word`; `None` when the word has no selected occurrences.
    pub fn ratio(&self, word: &str) -> Option<f64> {
        self.ratios.get(word).copied()
    }

    /// Smallest ratio, `None` when nothing was scored.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest ratio, `None` when nothing was scored.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// `(word, ratio)` in the selected table's first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(move |w| (w.as_str(), self.ratios[w]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Scores a selected table against a background table.
#[derive(Debug, Clone, Copy)]
pub struct RatioScorer {
    weight_factor: f64,
}

impl RatioScorer {
    pub fn new(weight_factor: f64) -> CloudResult<Self> {
        validate_weight_factor(weight_factor)?;
        Ok(Self { weight_factor })
    }

    pub fn weight_factor(&self) -> f64 {
        self.weight_factor
    }

    /// Score every word with a positive selected count.
    ///
    /// `selected_total` and `background_total` are item counts. The selected
    /// population must be a subset of the background one, so a word counted
    /// more often in the selection than in the background is rejected.
    pub fn score(
        &self,
        selected: &FrequencyTable,
        background: &FrequencyTable,
        selected_total: usize,
        background_total: usize,
    ) -> CloudResult<RatioTable> {
        let mut table = RatioTable::default();
        if selected.is_empty() {
            return Ok(table);
        }
        if selected_total == 0 || background_total < selected_total {
            return Err(CloudError::invalid(
                "totals",
                format!(
                    "selected total {selected_total} must be positive and at most background total {background_total}"
                ),
            ));
        }

        let k = self.weight_factor;
        let bg_total_weighted = (background_total as f64).powf(k);
        let sel_total = selected_total as f64;

        for (word, sel_count) in selected.counts() {
            if sel_count == 0 {
                continue;
            }
            let bg_count = background.count(word);
            if bg_count < sel_count {
                return Err(CloudError::invalid(
                    "background",
                    format!("word {word:?} counted {sel_count} times in selection but {bg_count} in background"),
                ));
            }
            let numerator = sel_count as f64 * bg_total_weighted;
            let denominator = sel_total * (bg_count as f64).powf(k);
            table.insert(word, numerator / denominator);
        }

        Ok(table)
    }
}

/// One-shot scoring, validating `weight_factor` first.
pub fn score(
    selected: &FrequencyTable,
    background: &FrequencyTable,
    selected_total: usize,
    background_total: usize,
    weight_factor: f64,
) -> CloudResult<RatioTable> {
    RatioScorer::new(weight_factor)?.score(selected, background, selected_total, background_total)
}
