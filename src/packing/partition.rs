//! Greedy multiway number partitioning.
//!
//! # Algorithm
//!
//! 1. Line up the rotated replicas and take each column as one group, so
//!    the replicas of a column share a partitioning decision.
//! 2. Sort groups by total weight, heaviest first.
//! 3. Give each group to the bin with the lowest running total.
//!
//! The bin count is fixed (one per worker); nothing overflows.
//!
//! # Complexity
//! O(g log g + g * k) where g=groups, k=bins.
//!
//! # Reference
//! Graham (1969), "Bounds on multiprocessing timing anomalies" (LPT rule)

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Bin, Item};

/// Balanced partitioner over a fixed number of bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvenPartitioner {
    bin_count: usize,
}

impl EvenPartitioner {
    /// Creates a partitioner producing `bin_count` bins.
    pub fn new(bin_count: usize) -> Self {
        Self { bin_count }
    }

    /// Number of bins produced.
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Fails unless there are at least as many bins as replicas.
    pub fn check_capacity(&self, redundancy: usize) -> EngineResult<()> {
        if redundancy > self.bin_count {
            return Err(EngineError::Validation(format!(
                "insufficient pool size for requested redundancy: {redundancy} replicas, {} workers",
                self.bin_count
            )));
        }
        Ok(())
    }

    /// Partitions rotated replicas into exactly `bin_count` bins.
    ///
    /// Bins may be empty when there are fewer groups than bins.
    ///
    /// # Errors
    /// `Validation` if `replicas.len() > bin_count`; checked before any work.
    pub fn partition(&self, replicas: &[Vec<Item>]) -> EngineResult<Vec<Bin>> {
        self.check_capacity(replicas.len())?;

        let columns = replicas.iter().map(Vec::len).max().unwrap_or(0);
        let groups: Vec<Vec<Item>> = (0..columns)
            .map(|col| replicas.iter().filter_map(|r| r.get(col).cloned()).collect())
            .collect();
        let weights: Vec<usize> = groups
            .iter()
            .map(|g| g.iter().map(|i| i.weight).sum())
            .collect();

        let mut order: Vec<usize> = (0..groups.len()).collect();
        order.sort_by(|&a, &b| weights[b].cmp(&weights[a]));

        let mut bins: Vec<Bin> = vec![Bin::default(); self.bin_count];
        let mut loads: Vec<usize> = vec![0; self.bin_count];

        for g in order {
            let Some((lightest, _)) = loads.iter().enumerate().min_by_key(|&(_, &load)| load)
            else {
                break;
            };
            loads[lightest] += weights[g];
            bins[lightest].items.extend(groups[g].iter().cloned());
        }

        debug!(
            groups = groups.len(),
            bins = self.bin_count,
            max_load = loads.iter().max().copied().unwrap_or(0),
            min_load = loads.iter().min().copied().unwrap_or(0),
            "partitioned replicas"
        );

        Ok(bins)
    }
}
