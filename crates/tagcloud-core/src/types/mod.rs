//! Data model shared by the engine: items, attribute values, populations.

pub mod collections;
pub mod item;
pub mod version;

pub use collections::{FxHashMap, FxHashSet};
pub use item::{AttributeSelector, AttributeValue, Item, ItemId, Population};
pub use version::next_version;
