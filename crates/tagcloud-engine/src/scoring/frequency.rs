//! FrequencyCounter: per-word item counts over a population.
//!
//! Each item contributes each distinct surviving token exactly once, so a
//! word's count is the number of items that mention it.

use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::collections::{FxHashMap, FxHashSet};
use tagcloud_core::types::{AttributeSelector, Item, ItemId};
use tracing::warn;

use crate::text::{Tokenizer, WordDelimiters, WordFilter};

/// Count and item list for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    pub count: u32,
    /// Items whose token set contained the word, in counting order.
    pub items: Vec<ItemId>,
}

/// The filtered token set of one counted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTokens {
    pub item: ItemId,
    pub tokens: Vec<String>,
}

/// Word -> count/items, plus first-encounter order and per-item token sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    stats: FxHashMap<String, WordStats>,
    order: Vec<String>,
    item_tokens: Vec<ItemTokens>,
}

impl FrequencyTable {
    fn record(&mut self, item: ItemId, tokens: Vec<String>) {
        for token in &tokens {
            if !self.stats.contains_key(token) {
                self.order.push(token.clone());
            }
            let entry = self.stats.entry(token.clone()).or_default();
            entry.count += 1;
            entry.items.push(item);
        }
        self.item_tokens.push(ItemTokens { item, tokens });
    }

    /// Count for `word`, zero if absent.
    pub fn count(&self, word: &str) -> u32 {
        self.stats.get(word).map_or(0, |s| s.count)
    }

    pub fn stats(&self, word: &str) -> Option<&WordStats> {
        self.stats.get(word)
    }

    /// Items that contained `word`; empty if none did.
    pub fn items_containing(&self, word: &str) -> &[ItemId] {
        self.stats
            .get(word)
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }

    /// Words in first-encounter order.
    pub fn words(&self) -> &[String] {
        &self.order
    }

    /// `(word, count)` pairs in first-encounter order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.order
            .iter()
            .map(move |w| (w.as_str(), self.stats[w].count))
    }

    /// Per-item filtered token sets, in counting order.
    pub fn item_tokens(&self) -> &[ItemTokens] {
        &self.item_tokens
    }

    /// Number of items counted, including items with no tokens.
    pub fn item_count(&self) -> usize {
        self.item_tokens.len()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Frequency table plus the non-fatal problems met while counting.
#[derive(Debug, Default)]
pub struct CountOutcome {
    pub table: FrequencyTable,
    pub warnings: Vec<CloudError>,
}

/// Counts words over items using one tokenizer, filter, and attribute selection.
pub struct FrequencyCounter<'a> {
    tokenizer: &'a Tokenizer,
    filter: &'a WordFilter,
    attributes: &'a AttributeSelector,
}

impl<'a> FrequencyCounter<'a> {
    pub fn new(
        tokenizer: &'a Tokenizer,
        filter: &'a WordFilter,
        attributes: &'a AttributeSelector,
    ) -> Self {
        Self {
            tokenizer,
            filter,
            attributes,
        }
    }

    /// Count every item. A non-text attribute is reported once per attribute
    /// name and contributes nothing.
    pub fn count<'i, I>(&self, items: I) -> CountOutcome
    where
        I: IntoIterator<Item = &'i Item>,
    {
        let mut outcome = CountOutcome::default();
        let mut reported: FxHashSet<String> = FxHashSet::default();

        for item in items {
            let fields = self.text_fields(item, &mut reported, &mut outcome.warnings);
            let mut seen = FxHashSet::default();
            let mut tokens = Vec::new();
            for field in fields {
                self.tokenizer.tokenize_into(field, &mut seen, &mut tokens);
            }
            tokens.retain(|t| !self.filter.contains(t));
            outcome.table.record(item.id, tokens);
        }

        outcome
    }

    fn text_fields<'i>(
        &self,
        item: &'i Item,
        reported: &mut FxHashSet<String>,
        warnings: &mut Vec<CloudError>,
    ) -> Vec<&'i str> {
        match self.attributes {
            AttributeSelector::All => item
                .attributes
                .values()
                .filter_map(|v| v.text_fields())
                .flatten()
                .collect(),
            AttributeSelector::Named(names) => {
                let mut fields = Vec::new();
                for name in names {
                    let Some(value) = item.attribute(name) else {
                        continue;
                    };
                    match value.text_fields() {
                        Some(text) => fields.extend(text),
                        None => {
                            if reported.insert(name.clone()) {
                                warn!(
                                    attribute = %name,
                                    found = value.type_name(),
                                    "attribute is not text, treating as empty"
                                );
                                warnings.push(CloudError::UnsupportedAttributeType {
                                    attribute: name.clone(),
                                    found: value.type_name().to_string(),
                                });
                            }
                        }
                    }
                }
                fields
            }
        }
    }
}

/// One-shot counting with a fresh tokenizer.
pub fn count<'i, I>(
    items: I,
    attributes: &AttributeSelector,
    filter: &WordFilter,
    delimiters: &WordDelimiters,
) -> CloudResult<CountOutcome>
where
    I: IntoIterator<Item = &'i Item>,
{
    attributes.validate()?;
    let tokenizer = Tokenizer::new(delimiters)?;
    Ok(FrequencyCounter::new(&tokenizer, filter, attributes).count(items))
}
