//! TagCloud: one named cloud with versioned caches.
//!
//! Cached values are keyed by the version stamps of everything they were
//! derived from. A stale cache is never an error: a key mismatch simply
//! recomputes. The background table only depends on the population, the
//! attributes, the filter, and the delimiters, so changing the selection or
//! the display parameters reuses it.

use std::sync::Arc;

use tagcloud_core::errors::{require_non_empty, CloudResult};
use tagcloud_core::types::{next_version, AttributeSelector, ItemId, Population};
use tracing::{debug, debug_span};

use super::params::CloudParams;
use super::pipeline::{self, CloudRequest};
use super::words::CloudOutput;
use crate::scoring::FrequencyTable;
use crate::text::{Tokenizer, WordDelimiters, WordFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BackgroundKey {
    attributes: u64,
    population: u64,
    filter: u64,
    delimiters: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputKey {
    revision: u64,
    background: BackgroundKey,
}

/// A named cloud: selection, parameters, and cached results.
#[derive(Debug)]
pub struct TagCloud {
    name: String,
    selection: Vec<ItemId>,
    params: CloudParams,
    /// Stamp of the last selection or parameter change.
    revision: u64,
    /// Stamp of the last attribute change.
    attributes_version: u64,
    background: Option<(BackgroundKey, Arc<FrequencyTable>)>,
    output: Option<(OutputKey, Arc<CloudOutput>)>,
}

impl TagCloud {
    /// A new cloud. The name must be non-blank and the selection non-empty.
    pub fn new(name: impl Into<String>, selection: &[ItemId], params: CloudParams) -> CloudResult<Self> {
        let name = name.into();
        require_non_empty("cloud name", &name)?;
        let selection = pipeline::normalize_selection(selection)?;
        Ok(Self {
            name,
            selection,
            params,
            revision: next_version(),
            attributes_version: next_version(),
            background: None,
            output: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    pub fn params(&self) -> &CloudParams {
        &self.params
    }

    pub fn set_selection(&mut self, selection: &[ItemId]) -> CloudResult<()> {
        let selection = pipeline::normalize_selection(selection)?;
        if selection != self.selection {
            self.selection = selection;
            self.revision = next_version();
        }
        Ok(())
    }

    pub fn set_attributes(&mut self, attributes: AttributeSelector) -> CloudResult<()> {
        self.update_params(|p| p.set_attributes(attributes))
    }

    /// Apply a parameter change through `update`. The cache is invalidated
    /// only if the parameters actually changed; on error nothing changes.
    pub fn update_params<F>(&mut self, update: F) -> CloudResult<()>
    where
        F: FnOnce(&mut CloudParams) -> CloudResult<()>,
    {
        let mut next = self.params.clone();
        update(&mut next)?;
        if next.attributes() != self.params.attributes() {
            self.attributes_version = next_version();
        }
        if next != self.params {
            self.params = next;
            self.revision = next_version();
        }
        Ok(())
    }

    pub fn set_weight_factor(&mut self, weight_factor: f64) -> CloudResult<()> {
        self.update_params(|p| p.set_weight_factor(weight_factor))
    }

    pub fn set_font_range(&mut self, min_font_size: u32, max_font_size: u32) -> CloudResult<()> {
        self.update_params(|p| p.set_font_range(min_font_size, max_font_size))
    }

    pub fn set_cluster_cutoff(&mut self, cutoff: f64) -> CloudResult<()> {
        self.update_params(|p| p.set_cluster_cutoff(cutoff))
    }

    pub fn set_max_words(&mut self, max_words: usize) -> CloudResult<()> {
        self.update_params(|p| p.set_max_words(max_words))
    }

    pub fn set_clustering(&mut self, clustering: bool) -> CloudResult<()> {
        self.update_params(|p| {
            p.set_clustering(clustering);
            Ok(())
        })
    }

    /// Drop every cached value; the next compute starts from scratch.
    pub fn invalidate(&mut self) {
        self.background = None;
        self.output = None;
    }

    /// Compute the cloud, reusing whatever cached values are still current.
    ///
    /// Repeated calls with unchanged inputs return the same `Arc`.
    pub fn compute(
        &mut self,
        population: &Population,
        filter: &WordFilter,
        delimiters: &WordDelimiters,
    ) -> CloudResult<Arc<CloudOutput>> {
        let span = debug_span!("tagcloud.compute", cloud = %self.name);
        let _enter = span.enter();

        let background_key = BackgroundKey {
            attributes: self.attributes_version,
            population: population.version(),
            filter: filter.version(),
            delimiters: delimiters.version(),
        };
        let output_key = OutputKey {
            revision: self.revision,
            background: background_key,
        };

        if let Some((key, output)) = &self.output {
            if *key == output_key {
                debug!("output cache hit");
                return Ok(Arc::clone(output));
            }
        }

        let tokenizer = Tokenizer::new(delimiters)?;
        let cached_background = match &self.background {
            Some((key, table)) if *key == background_key => Some(Arc::clone(table)),
            _ => None,
        };
        let background = match cached_background {
            Some(table) => {
                debug!("background cache hit");
                table
            }
            None => {
                debug!("background cache miss");
                let table = Arc::new(pipeline::count_background(
                    &tokenizer,
                    population,
                    self.params.attributes(),
                    filter,
                ));
                self.background = Some((background_key, Arc::clone(&table)));
                table
            }
        };

        let request = CloudRequest {
            population,
            selection: &self.selection,
            params: &self.params,
            filter,
            delimiters,
        };
        let output = Arc::new(pipeline::build_output(
            &tokenizer,
            &background,
            &self.selection,
            &request,
        )?);
        self.output = Some((output_key, Arc::clone(&output)));
        Ok(output)
    }

    /// Output of the last computation, if it is still current for these inputs.
    pub fn cached(
        &self,
        population: &Population,
        filter: &WordFilter,
        delimiters: &WordDelimiters,
    ) -> Option<Arc<CloudOutput>> {
        let (key, output) = self.output.as_ref()?;
        let current = *key
            == OutputKey {
                revision: self.revision,
                background: BackgroundKey {
                    attributes: self.attributes_version,
                    population: population.version(),
                    filter: filter.version(),
                    delimiters: delimiters.version(),
                },
            };
        current.then(|| Arc::clone(output))
    }

    /// Selected items containing `word`, from the last computation.
    /// Empty before the first computation.
    pub fn items_containing(&self, word: &str) -> Vec<ItemId> {
        self.output
            .as_ref()
            .map(|(_, output)| output.items_containing(word).to_vec())
            .unwrap_or_default()
    }
}
