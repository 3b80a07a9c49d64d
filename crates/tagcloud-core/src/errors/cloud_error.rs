//! Cloud errors: validation failures surfaced to the caller.
//!
//! Every variant is a deterministic validation failure scoped to a single
//! cloud or operation. Nothing here is retried.

use super::error_code::{self, TagCloudErrorCode};
use super::ConfigError;

/// Errors raised by cloud creation, mutation, and computation.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("Invalid argument {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("A cloud named {name:?} already exists")]
    DuplicateName { name: String },

    #[error("Parameter {parameter} = {value} is outside {expected}")]
    OutOfRange {
        parameter: String,
        value: String,
        expected: String,
    },

    #[error("Attribute {attribute:?} is {found}, not text")]
    UnsupportedAttributeType { attribute: String, found: String },

    #[error("No cloud named {name:?}")]
    CloudNotFound { name: String },

    #[error("No network registered as {network:?}")]
    NetworkNotFound { network: String },

    #[error("Cannot serialize {what}: {message}")]
    Serialization { what: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CloudError {
    /// Shorthand for [`CloudError::InvalidArgument`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for [`CloudError::OutOfRange`].
    pub fn out_of_range(
        parameter: impl Into<String>,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            parameter: parameter.into(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

impl TagCloudErrorCode for CloudError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::DuplicateName { .. } => error_code::DUPLICATE_NAME,
            Self::OutOfRange { .. } => error_code::OUT_OF_RANGE,
            Self::UnsupportedAttributeType { .. } => error_code::UNSUPPORTED_ATTRIBUTE_TYPE,
            Self::CloudNotFound { .. } | Self::NetworkNotFound { .. } => error_code::NOT_FOUND,
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used throughout the engine.
pub type CloudResult<T> = Result<T, CloudError>;

/// Rejects a required identifier that is empty or whitespace-only.
pub fn require_non_empty(field: &str, value: &str) -> CloudResult<()> {
    if value.trim().is_empty() {
        return Err(CloudError::invalid(field, "must not be empty"));
    }
    Ok(())
}
