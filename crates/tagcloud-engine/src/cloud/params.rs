//! Per-cloud computation parameters.

use serde::{Deserialize, Serialize};
use tagcloud_core::config::CloudConfig;
use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::AttributeSelector;

use crate::cluster::validate_cluster_cutoff;
use crate::scoring::font::validate_font_range;
use crate::scoring::ratio::validate_weight_factor;

/// Everything about a cloud other than its selection.
///
/// Fields are private so that every change goes through a validating setter;
/// a rejected value leaves the previous one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudParams {
    attributes: AttributeSelector,
    weight_factor: f64,
    min_font_size: u32,
    max_font_size: u32,
    cluster_cutoff: f64,
    max_words: usize,
    clustering: bool,
}

impl CloudParams {
    /// Parameters seeded from the effective config.
    pub fn from_config(config: &CloudConfig, attributes: AttributeSelector) -> CloudResult<Self> {
        attributes.validate()?;
        let params = Self {
            attributes,
            weight_factor: config.effective_weight_factor(),
            min_font_size: config.effective_min_font_size(),
            max_font_size: config.effective_max_font_size(),
            cluster_cutoff: config.effective_cluster_cutoff(),
            max_words: config.effective_max_words(),
            clustering: config.effective_clustering(),
        };
        validate_weight_factor(params.weight_factor)?;
        validate_font_range(params.min_font_size, params.max_font_size)?;
        validate_cluster_cutoff(params.cluster_cutoff)?;
        validate_max_words(params.max_words)?;
        Ok(params)
    }

    /// Compiled defaults for the given attributes.
    pub fn new(attributes: AttributeSelector) -> CloudResult<Self> {
        Self::from_config(&CloudConfig::default(), attributes)
    }

    pub fn attributes(&self) -> &AttributeSelector {
        &self.attributes
    }

    pub fn weight_factor(&self) -> f64 {
        self.weight_factor
    }

    pub fn min_font_size(&self) -> u32 {
        self.min_font_size
    }

    pub fn max_font_size(&self) -> u32 {
        self.max_font_size
    }

    pub fn cluster_cutoff(&self) -> f64 {
        self.cluster_cutoff
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn clustering(&self) -> bool {
        self.clustering
    }

    pub fn set_attributes(&mut self, attributes: AttributeSelector) -> CloudResult<()> {
        attributes.validate()?;
        self.attributes = attributes;
        Ok(())
    }

    pub fn set_weight_factor(&mut self, weight_factor: f64) -> CloudResult<()> {
        validate_weight_factor(weight_factor)?;
        self.weight_factor = weight_factor;
        Ok(())
    }

    /// Set both font bounds together so a range can be moved in one step.
    pub fn set_font_range(&mut self, min_font_size: u32, max_font_size: u32) -> CloudResult<()> {
        validate_font_range(min_font_size, max_font_size)?;
        self.min_font_size = min_font_size;
        self.max_font_size = max_font_size;
        Ok(())
    }

    pub fn set_cluster_cutoff(&mut self, cutoff: f64) -> CloudResult<()> {
        validate_cluster_cutoff(cutoff)?;
        self.cluster_cutoff = cutoff;
        Ok(())
    }

    pub fn set_max_words(&mut self, max_words: usize) -> CloudResult<()> {
        validate_max_words(max_words)?;
        self.max_words = max_words;
        Ok(())
    }

    pub fn set_clustering(&mut self, clustering: bool) {
        self.clustering = clustering;
    }
}

fn validate_max_words(max_words: usize) -> CloudResult<()> {
    if max_words == 0 {
        return Err(CloudError::out_of_range("max_words", max_words, "[1, usize::MAX]"));
    }
    Ok(())
}
