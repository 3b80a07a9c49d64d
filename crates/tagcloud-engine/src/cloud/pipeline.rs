//! The cloud pipeline as plain functions of their inputs.
//!
//! tokenize -> count (background, selection) -> score -> font -> sort ->
//! truncate -> cluster. [`run`] does everything from scratch; `TagCloud`
//! calls the same stages but reuses a cached background table.

use std::sync::Arc;

use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::collections::FxHashSet;
use tagcloud_core::types::{AttributeSelector, ItemId, Population};
use tracing::debug;

use super::params::CloudParams;
use super::words::{CloudOutput, CloudWord};
use crate::cluster::{ClusterBuilder, CooccurrenceIndex};
use crate::scoring::{CountOutcome, FontSizeMapper, FrequencyCounter, FrequencyTable, RatioScorer};
use crate::text::{Tokenizer, WordDelimiters, WordFilter};

/// Borrowed inputs of one computation.
#[derive(Debug, Clone, Copy)]
pub struct CloudRequest<'a> {
    pub population: &'a Population,
    pub selection: &'a [ItemId],
    pub params: &'a CloudParams,
    pub filter: &'a WordFilter,
    pub delimiters: &'a WordDelimiters,
}

/// Compute a cloud from scratch.
pub fn run(request: &CloudRequest<'_>) -> CloudResult<CloudOutput> {
    let selection = normalize_selection(request.selection)?;
    let tokenizer = Tokenizer::new(request.delimiters)?;
    let background = count_background(
        &tokenizer,
        request.population,
        request.params.attributes(),
        request.filter,
    );
    build_output(&tokenizer, &background, &selection, request)
}

/// Drop repeated ids, keeping first occurrences. An empty selection is
/// rejected.
pub fn normalize_selection(selection: &[ItemId]) -> CloudResult<Vec<ItemId>> {
    if selection.is_empty() {
        return Err(CloudError::invalid("selection", "at least one item is required"));
    }
    let mut seen = FxHashSet::default();
    Ok(selection
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect())
}

/// Count the whole population. Attribute warnings are logged by the counter
/// and otherwise dropped: the selection count reports them to the caller.
pub(crate) fn count_background(
    tokenizer: &Tokenizer,
    population: &Population,
    attributes: &AttributeSelector,
    filter: &WordFilter,
) -> FrequencyTable {
    let outcome = FrequencyCounter::new(tokenizer, filter, attributes).count(population.items());
    debug!(
        items = population.len(),
        words = outcome.table.len(),
        "background counted"
    );
    outcome.table
}

/// Every stage after the background count. `selection` must already be
/// normalized.
pub(crate) fn build_output(
    tokenizer: &Tokenizer,
    background: &FrequencyTable,
    selection: &[ItemId],
    request: &CloudRequest<'_>,
) -> CloudResult<CloudOutput> {
    let params = request.params;
    let items = request.population.resolve(selection)?;

    let CountOutcome {
        table: selected,
        warnings,
    } = FrequencyCounter::new(tokenizer, request.filter, params.attributes())
        .count(items.iter().copied());

    let ratios = RatioScorer::new(params.weight_factor())?.score(
        &selected,
        background,
        items.len(),
        request.population.len(),
    )?;

    let mapper = FontSizeMapper::new(
        ratios.min().unwrap_or(0.0),
        ratios.max().unwrap_or(0.0),
        params.min_font_size(),
        params.max_font_size(),
    )?;
    let mut words: Vec<CloudWord> = ratios
        .iter()
        .map(|(word, ratio)| CloudWord {
            word: word.to_string(),
            font_size: mapper.font_size(ratio),
            cluster: 0,
            selected_count: selected.count(word),
        })
        .collect();
    // Stable: equal fonts stay in first-encounter order.
    words.sort_by(|a, b| b.font_size.cmp(&a.font_size));
    words.truncate(params.max_words());

    let merges = if params.clustering() && !words.is_empty() {
        assign_clusters(&selected, &mut words, params.cluster_cutoff())?
    } else {
        0
    };

    debug!(
        selected_items = items.len(),
        words = words.len(),
        merges,
        "cloud built"
    );

    Ok(CloudOutput {
        words,
        selected: Arc::new(selected),
        ratios,
        selected_total: items.len(),
        background_total: request.population.len(),
        merges,
        warnings,
    })
}

fn assign_clusters(
    selected: &FrequencyTable,
    words: &mut [CloudWord],
    cutoff: f64,
) -> CloudResult<usize> {
    let mut builder = ClusterBuilder::new();
    builder.initialize(&CooccurrenceIndex::from_table(selected));
    let merges = builder.cluster_data(cutoff)?;
    let ids = builder.cluster_ids(words.iter().map(|w| w.word.as_str()));
    for word in words.iter_mut() {
        word.cluster = ids.get(&word.word).copied().unwrap_or(0);
    }
    Ok(merges)
}
