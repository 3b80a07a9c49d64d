//! # tagcloud-engine
//!
//! The analytical core of the tag cloud:
//! - **text**: tokenizer, delimiters, word filter and stop words
//! - **scoring**: per-item word counts, weighted ratios, font mapping
//! - **cluster**: co-occurrence index, union-find, greedy clustering
//! - **cloud**: parameters, the pipeline, cached `TagCloud`, table export
//! - **registry**: network-scoped clouds behind per-cloud locks
//!
//! Everything is plain data in and out. Rendering and host storage live
//! elsewhere.

pub mod cloud;
pub mod cluster;
pub mod registry;
pub mod scoring;
pub mod text;

pub use cloud::{CloudOutput, CloudParams, CloudTableRow, CloudWord, TagCloud};
pub use cluster::ClusterBuilder;
pub use registry::{CloudRegistry, NetworkScope};
pub use scoring::{FontSizeMapper, FrequencyTable, RatioScorer, RatioTable};
pub use text::{Tokenizer, WordDelimiters, WordFilter};
