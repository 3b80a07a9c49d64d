//! # tagcloud-core
//!
//! Foundation crate for the tag cloud engine.
//! Defines the item data model, errors, config, tracing setup, and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TagCloudConfig;
pub use errors::{CloudError, CloudResult, ConfigError};
pub use types::{AttributeSelector, AttributeValue, Item, ItemId, Population};
