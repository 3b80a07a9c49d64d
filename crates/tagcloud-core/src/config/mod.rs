//! Configuration system for the tag cloud engine.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod cloud_config;
pub mod tagcloud_config;
pub mod text_config;

pub use cloud_config::CloudConfig;
pub use tagcloud_config::{ConfigOverrides, TagCloudConfig};
pub use text_config::TextConfig;
