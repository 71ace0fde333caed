//! First-fit bin packing.
//!
//! # Algorithm
//!
//! 1. Walk items in the given order.
//! 2. Put each item into the first open bin with room for it.
//! 3. Open a new bin when none has room.
//! 4. Items heavier than the capacity each get a singleton bin.
//!
//! Fed a weight-descending sequence this is first-fit decreasing; fed a
//! shuffled sequence (as the engine does per replica) it trades some
//! compactness for variety between replicas.
//!
//! # Complexity
//! O(n * b) where n=items, b=bins opened.
//!
//! # Reference
//! Johnson (1973), "Near-optimal bin packing algorithms"

use crate::models::{Bin, Item};

/// First-fit packer with a fixed bin capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstFitPacker {
    target_bin_size: usize,
}

impl FirstFitPacker {
    /// Creates a packer with the given capacity (sub-units per bin).
    pub fn new(target_bin_size: usize) -> Self {
        Self { target_bin_size }
    }

    /// Bin capacity.
    pub fn target_bin_size(&self) -> usize {
        self.target_bin_size
    }

    /// Packs items in order.
    ///
    /// Regular bins come first, in opening order, followed by one singleton
    /// bin per oversized item. No item is ever dropped.
    pub fn pack(&self, items: &[Item]) -> Vec<Bin> {
        let mut bins: Vec<Bin> = Vec::new();
        let mut loads: Vec<usize> = Vec::new();
        let mut oversized: Vec<Bin> = Vec::new();

        for item in items {
            if item.weight > self.target_bin_size {
                oversized.push(Bin::new(vec![item.clone()]));
                continue;
            }

            let slot = loads
                .iter()
                .position(|&load| load + item.weight <= self.target_bin_size);
            match slot {
                Some(idx) => {
                    bins[idx].push(item.clone());
                    loads[idx] += item.weight;
                }
                None => {
                    bins.push(Bin::new(vec![item.clone()]));
                    loads.push(item.weight);
                }
            }
        }

        bins.extend(oversized);
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(weights: &[usize]) -> Vec<Item> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                Item::new(format!("r{i}")).with_sub_units((0..w).map(|k| format!("r{i}_{k}")))
            })
            .collect()
    }

    fn bin_weights(bins: &[Bin]) -> Vec<Vec<usize>> {
        bins.iter()
            .map(|b| b.items.iter().map(|i| i.weight).collect())
            .collect()
    }

    #[test]
    fn test_first_fit_decreasing() {
        let bins = FirstFitPacker::new(6).pack(&weighted(&[5, 4, 3, 2, 1]));
        assert_eq!(bin_weights(&bins), vec![vec![5, 1], vec![4, 2], vec![3]]);
    }

    #[test]
    fn test_oversized_item_gets_singleton_bin() {
        let bins = FirstFitPacker::new(6).pack(&weighted(&[10, 2, 3]));
        assert_eq!(bin_weights(&bins), vec![vec![2, 3], vec![10]]);
    }

    #[test]
    fn test_exact_fit_allowed() {
        let bins = FirstFitPacker::new(6).pack(&weighted(&[6, 3, 3]));
        assert_eq!(bin_weights(&bins), vec![vec![6], vec![3, 3]]);
    }

    #[test]
    fn test_no_item_lost() {
        let items = weighted(&[7, 1, 9, 4, 4, 2, 8, 3]);
        let bins = FirstFitPacker::new(6).pack(&items);
        let packed: usize = bins.iter().map(Bin::total_weight).sum();
        let total: usize = items.iter().map(|i| i.weight).sum();
        assert_eq!(packed, total);
        assert!(bins
            .iter()
            .all(|b| b.total_weight() <= 6 || b.len() == 1));
    }

    #[test]
    fn test_empty_input() {
        assert!(FirstFitPacker::new(6).pack(&[]).is_empty());
    }
}
