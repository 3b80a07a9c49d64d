//! ClusterBuilder: greedy hierarchical merging of co-occurring words.
//!
//! Candidate pairs sit in a max-heap keyed by co-occurrence count (the
//! denominator is shared, so count order is probability order). Equal counts
//! are popped in lexicographic order of the word pair. Cluster membership is
//! a union-find over word indices.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::collections::FxHashMap;
use tracing::debug;

use super::cooccurrence::{CooccurrenceIndex, WordPair};
use super::union_find::UnionFind;

/// Reject a cutoff that is negative or not finite.
pub fn validate_cluster_cutoff(cutoff: f64) -> CloudResult<()> {
    if !cutoff.is_finite() || cutoff < 0.0 {
        return Err(CloudError::out_of_range("cluster_cutoff", cutoff, "[0, inf)"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterState {
    #[default]
    Uninitialized,
    Initialized,
    Clustered,
}

/// Heap entry. `lo_rank`/`hi_rank` are the lexicographic ranks of the two
/// words, used only to order ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    count: u32,
    lo_rank: usize,
    hi_rank: usize,
    first: usize,
    second: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.lo_rank.cmp(&self.lo_rank))
            .then_with(|| other.hi_rank.cmp(&self.hi_rank))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy co-occurrence clustering over one selection.
#[derive(Debug, Clone, Default)]
pub struct ClusterBuilder {
    state: ClusterState,
    words: Vec<String>,
    heap: BinaryHeap<Candidate>,
    sets: Option<UnionFind>,
    item_count: usize,
    merges: usize,
}

impl ClusterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ClusterState {
        self.state
    }

    /// Successful merges performed so far.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Singleton clusters for every word plus every co-occurring pair as a
    /// candidate. Resets any previous clustering.
    pub fn initialize(&mut self, index: &CooccurrenceIndex) {
        let words = index.words().to_vec();

        let mut sorted: Vec<usize> = (0..words.len()).collect();
        sorted.sort_by(|&a, &b| words[a].cmp(&words[b]));
        let mut rank = vec![0usize; words.len()];
        for (r, &w) in sorted.iter().enumerate() {
            rank[w] = r;
        }

        let heap: BinaryHeap<Candidate> = index
            .pairs()
            .iter()
            .map(|&WordPair { first, second, count, .. }| Candidate {
                count,
                lo_rank: rank[first],
                hi_rank: rank[second],
                first,
                second,
            })
            .collect();

        debug!(words = words.len(), pairs = heap.len(), "cluster builder initialized");
        self.sets = Some(UnionFind::new(words.len()));
        self.words = words;
        self.heap = heap;
        self.item_count = index.item_count();
        self.merges = 0;
        self.state = ClusterState::Initialized;
    }

    /// Merge pairs while the best remaining pair has probability >= `cutoff`.
    ///
    /// A pair whose words already share a cluster is consumed without a
    /// merge. Returns the number of merges made by this call. Does nothing
    /// before [`initialize`](Self::initialize).
    pub fn cluster_data(&mut self, cutoff: f64) -> CloudResult<usize> {
        let Some(sets) = self.sets.as_mut() else {
            return Ok(0);
        };
        validate_cluster_cutoff(cutoff)?;

        let mut merged = 0;
        while let Some(top) = self.heap.peek() {
            let probability = f64::from(top.count) / self.item_count as f64;
            if probability < cutoff {
                break;
            }
            let Candidate { first, second, .. } = *top;
            self.heap.pop();
            if sets.union(first, second) {
                merged += 1;
            }
        }

        self.merges += merged;
        self.state = ClusterState::Clustered;
        debug!(cutoff, merged, remaining = self.heap.len(), "clustered");
        Ok(merged)
    }

    /// Cluster ids for words in `order`.
    ///
    /// Clusters with two or more members are numbered 1.. by the position of
    /// their first member in `order`. Singletons and words unknown to the
    /// builder get 0.
    pub fn cluster_ids<'w, I>(&mut self, order: I) -> FxHashMap<String, u32>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut ids = FxHashMap::default();
        let Some(sets) = self.sets.as_mut() else {
            for word in order {
                ids.insert(word.to_string(), 0);
            }
            return ids;
        };

        let positions: FxHashMap<&str, usize> = self
            .words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.as_str(), i))
            .collect();
        let mut sizes: FxHashMap<usize, usize> = FxHashMap::default();
        for i in 0..sets.len() {
            *sizes.entry(sets.find(i)).or_insert(0) += 1;
        }

        let mut numbering: FxHashMap<usize, u32> = FxHashMap::default();
        for word in order {
            let id = match positions.get(word) {
                Some(&i) => {
                    let root = sets.find(i);
                    if sizes.get(&root).copied().unwrap_or(1) > 1 {
                        let next = numbering.len() as u32 + 1;
                        *numbering.entry(root).or_insert(next)
                    } else {
                        0
                    }
                }
                None => 0,
            };
            ids.insert(word.to_string(), id);
        }
        ids
    }
}
