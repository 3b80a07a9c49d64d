//! Clouds: parameters, the pipeline, the cached `TagCloud`, and export.

pub mod export;
pub mod params;
pub mod pipeline;
pub mod tag_cloud;
pub mod words;

pub use export::{rows_to_json, CloudTableRow};
pub use params::CloudParams;
pub use pipeline::{run, CloudRequest};
pub use tag_cloud::TagCloud;
pub use words::{CloudOutput, CloudWord};
