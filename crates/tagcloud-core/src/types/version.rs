//! Process-wide version stamps for cache keys.
//!
//! Every mutable input of a cloud (filter, delimiters, population, cloud
//! parameters) takes a fresh stamp on each effective mutation. Stamps are
//! unique across instances, so an equal stamp always means equal content and
//! a cache keyed on stamps cannot confuse two different inputs.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// A stamp never handed out before. Zero is reserved for empty defaults.
pub fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}
