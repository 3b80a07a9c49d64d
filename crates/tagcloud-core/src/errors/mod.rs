//! Error handling for the tag cloud engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cloud_error;
pub mod config_error;
pub mod error_code;

pub use cloud_error::{require_non_empty, CloudError, CloudResult};
pub use config_error::ConfigError;
pub use error_code::TagCloudErrorCode;
