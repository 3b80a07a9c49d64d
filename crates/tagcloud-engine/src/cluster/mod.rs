//! Word clustering by pairwise co-occurrence.

pub mod builder;
pub mod cooccurrence;
pub mod union_find;

pub use builder::{validate_cluster_cutoff, ClusterBuilder, ClusterState};
pub use cooccurrence::{CooccurrenceIndex, WordPair};
pub use union_find::UnionFind;
