//! Shared constants for the tag cloud engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default background weighting exponent applied to the ratio denominator.
pub const DEFAULT_WEIGHT_FACTOR: f64 = 1.0;

/// Default smallest font size handed to the display layer.
pub const DEFAULT_MIN_FONT_SIZE: u32 = 12;

/// Default largest font size handed to the display layer.
pub const DEFAULT_MAX_FONT_SIZE: u32 = 64;

/// Default minimum co-occurrence probability for merging two word clusters.
pub const DEFAULT_CLUSTER_CUTOFF: f64 = 1.0;

/// Default cap on the number of words in a computed cloud.
pub const DEFAULT_MAX_WORDS: usize = 250;

/// Clustering runs by default.
pub const DEFAULT_CLUSTERING: bool = true;

/// New network scopes start with the built-in stop words.
pub const DEFAULT_USE_STOP_WORDS: bool = true;

/// Prefix for generated cloud names (`Cloud_1`, `Cloud_2`, ...).
pub const CLOUD_NAME_PREFIX: &str = "Cloud_";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "tagcloud.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TAGCLOUD_LOG";
