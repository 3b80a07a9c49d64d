//! Scoring: frequency counting, ratio scoring, and font-size mapping.

pub mod font;
pub mod frequency;
pub mod ratio;

pub use font::FontSizeMapper;
pub use frequency::{CountOutcome, FrequencyCounter, FrequencyTable, ItemTokens, WordStats};
pub use ratio::{RatioScorer, RatioTable};
