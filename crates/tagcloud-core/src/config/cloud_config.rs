//! Cloud computation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Defaults for new clouds: scoring, font mapping, clustering, truncation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Background weighting exponent in [0, 1]. Default: 1.0.
    pub weight_factor: Option<f64>,
    /// Smallest font size. Default: 12.
    pub min_font_size: Option<u32>,
    /// Largest font size. Default: 64.
    pub max_font_size: Option<u32>,
    /// Minimum co-occurrence probability to merge clusters. Default: 1.0.
    pub cluster_cutoff: Option<f64>,
    /// Maximum number of words kept in a cloud. Default: 250.
    pub max_words: Option<usize>,
    /// Run word clustering after scoring. Default: true.
    pub clustering: Option<bool>,
}

impl CloudConfig {
    pub fn effective_weight_factor(&self) -> f64 {
        self.weight_factor.unwrap_or(constants::DEFAULT_WEIGHT_FACTOR)
    }

    pub fn effective_min_font_size(&self) -> u32 {
        self.min_font_size.unwrap_or(constants::DEFAULT_MIN_FONT_SIZE)
    }

    pub fn effective_max_font_size(&self) -> u32 {
        self.max_font_size.unwrap_or(constants::DEFAULT_MAX_FONT_SIZE)
    }

    pub fn effective_cluster_cutoff(&self) -> f64 {
        self.cluster_cutoff.unwrap_or(constants::DEFAULT_CLUSTER_CUTOFF)
    }

    pub fn effective_max_words(&self) -> usize {
        self.max_words.unwrap_or(constants::DEFAULT_MAX_WORDS)
    }

    pub fn effective_clustering(&self) -> bool {
        self.clustering.unwrap_or(constants::DEFAULT_CLUSTERING)
    }
}
