//! Configuration errors.

use super::error_code::{self, TagCloudErrorCode};

/// Errors raised while loading or validating a [`TagCloudConfig`](crate::config::TagCloudConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Environment variable {var} has unusable value {value:?}")]
    InvalidEnvValue { var: String, value: String },
}

impl TagCloudErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
