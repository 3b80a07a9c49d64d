//! Top-level tag cloud configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CloudConfig, TextConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Host overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TAGCLOUD_*`)
/// 3. Project config (`tagcloud.toml` in project root)
/// 4. User config (`~/.tagcloud/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TagCloudConfig {
    pub cloud: CloudConfig,
    pub text: TextConfig,
}

/// Overrides the host applies on top of every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub weight_factor: Option<f64>,
    pub min_font_size: Option<u32>,
    pub max_font_size: Option<u32>,
    pub cluster_cutoff: Option<f64>,
    pub max_words: Option<usize>,
    pub clustering: Option<bool>,
}

impl TagCloudConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(weight) = self.cloud.weight_factor {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::ValidationFailed {
                    field: "cloud.weight_factor".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        let min_font = self.cloud.effective_min_font_size();
        let max_font = self.cloud.effective_max_font_size();
        if min_font == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cloud.min_font_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if min_font > max_font {
            return Err(ConfigError::ValidationFailed {
                field: "cloud.max_font_size".to_string(),
                message: format!("must be at least min_font_size ({min_font})"),
            });
        }
        if let Some(cutoff) = self.cloud.cluster_cutoff {
            if !cutoff.is_finite() || cutoff < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "cloud.cluster_cutoff".to_string(),
                    message: "must be a finite, non-negative probability".to_string(),
                });
            }
        }
        if self.cloud.max_words == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "cloud.max_words".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.text.delimiters.iter().any(|d| d.is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "text.delimiters".to_string(),
                message: "delimiters must not be empty strings".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tagcloud/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".tagcloud").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TagCloudConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: TagCloudConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.merge(&file_config);
        tracing::debug!(path = %path.display(), "config layer merged");
        Ok(())
    }

    /// Merge `other` into `self`; `other` wins wherever it sets a value.
    fn merge(&mut self, other: &TagCloudConfig) {
        let cloud = &other.cloud;
        if cloud.weight_factor.is_some() {
            self.cloud.weight_factor = cloud.weight_factor;
        }
        if cloud.min_font_size.is_some() {
            self.cloud.min_font_size = cloud.min_font_size;
        }
        if cloud.max_font_size.is_some() {
            self.cloud.max_font_size = cloud.max_font_size;
        }
        if cloud.cluster_cutoff.is_some() {
            self.cloud.cluster_cutoff = cloud.cluster_cutoff;
        }
        if cloud.max_words.is_some() {
            self.cloud.max_words = cloud.max_words;
        }
        if cloud.clustering.is_some() {
            self.cloud.clustering = cloud.clustering;
        }

        let text = &other.text;
        if text.use_stop_words.is_some() {
            self.text.use_stop_words = text.use_stop_words;
        }
        if !text.extra_stop_words.is_empty() {
            self.text.extra_stop_words = text.extra_stop_words.clone();
        }
        if !text.delimiters.is_empty() {
            self.text.delimiters = text.delimiters.clone();
        }
    }

    /// Apply environment variable overrides.
    /// A set but unparseable variable is an error rather than silently ignored.
    fn apply_env_overrides(config: &mut TagCloudConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value("TAGCLOUD_WEIGHT_FACTOR")? {
            config.cloud.weight_factor = Some(v);
        }
        if let Some(v) = env_value("TAGCLOUD_MIN_FONT_SIZE")? {
            config.cloud.min_font_size = Some(v);
        }
        if let Some(v) = env_value("TAGCLOUD_MAX_FONT_SIZE")? {
            config.cloud.max_font_size = Some(v);
        }
        if let Some(v) = env_value("TAGCLOUD_CLUSTER_CUTOFF")? {
            config.cloud.cluster_cutoff = Some(v);
        }
        if let Some(v) = env_value("TAGCLOUD_MAX_WORDS")? {
            config.cloud.max_words = Some(v);
        }
        if let Some(v) = env_value("TAGCLOUD_CLUSTERING")? {
            config.cloud.clustering = Some(v);
        }
        if let Some(v) = env_value("TAGCLOUD_USE_STOP_WORDS")? {
            config.text.use_stop_words = Some(v);
        }
        Ok(())
    }

    /// Apply host overrides (highest priority).
    fn apply_overrides(config: &mut TagCloudConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.weight_factor {
            config.cloud.weight_factor = Some(v);
        }
        if let Some(v) = overrides.min_font_size {
            config.cloud.min_font_size = Some(v);
        }
        if let Some(v) = overrides.max_font_size {
            config.cloud.max_font_size = Some(v);
        }
        if let Some(v) = overrides.cluster_cutoff {
            config.cloud.cluster_cutoff = Some(v);
        }
        if let Some(v) = overrides.max_words {
            config.cloud.max_words = Some(v);
        }
        if let Some(v) = overrides.clustering {
            config.cloud.clustering = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_value<T: FromStr>(var: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
