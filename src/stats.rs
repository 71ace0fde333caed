//! Assignment quality metrics.
//!
//! Summarizes how evenly a run spread the work.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned workers | Workers with at least one item |
//! | Min / Max load | Fewest / most sub-units on one worker |
//! | Mean load | Assigned sub-units / assigned workers |
//! | Unassigned rate | Unassigned sub-units / accounted sub-units |

use crate::models::AssignmentResult;

/// Load distribution of an assignment result.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStats {
    /// Workers with at least one assigned item.
    pub assigned_workers: usize,
    /// Smallest per-worker sub-unit count (0 if nobody was assigned).
    pub min_load: usize,
    /// Largest per-worker sub-unit count.
    pub max_load: usize,
    /// Mean per-worker sub-unit count.
    pub mean_load: f64,
    /// Share of accounted sub-units left unassigned (0.0..1.0).
    pub unassigned_rate: f64,
}

impl AssignmentStats {
    /// Computes stats from a result.
    pub fn calculate(result: &AssignmentResult) -> Self {
        let loads: Vec<usize> = result
            .worker_assignments
            .iter()
            .map(|w| w.assigned_sub_unit_count())
            .collect();
        let assigned: usize = loads.iter().sum();

        let mean_load = if loads.is_empty() {
            0.0
        } else {
            assigned as f64 / loads.len() as f64
        };

        let accounted = assigned + result.unassigned_sub_unit_count;
        let unassigned_rate = if accounted == 0 {
            0.0
        } else {
            result.unassigned_sub_unit_count as f64 / accounted as f64
        };

        Self {
            assigned_workers: loads.len(),
            min_load: loads.iter().min().copied().unwrap_or(0),
            max_load: loads.iter().max().copied().unwrap_or(0),
            mean_load,
            unassigned_rate,
        }
    }

    /// Spread between the heaviest and lightest worker.
    pub fn load_spread(&self) -> usize {
        self.max_load - self.min_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bin, Item, Worker};

    fn worker(id: &str, subs: usize) -> Worker {
        let mut w = Worker::new(id);
        w.assigned_items.push(
            Item::new(format!("{id}-r")).with_sub_units((0..subs).map(|k| format!("{id}-{k}"))),
        );
        w
    }

    #[test]
    fn test_stats() {
        let leftover = Bin::new(vec![Item::new("x").with_sub_units(["x1", "x2"])]);
        let r = AssignmentResult::new(vec![worker("w1", 2), worker("w2", 6)], vec![leftover]);
        let s = AssignmentStats::calculate(&r);
        assert_eq!(s.assigned_workers, 2);
        assert_eq!(s.min_load, 2);
        assert_eq!(s.max_load, 6);
        assert_eq!(s.load_spread(), 4);
        assert!((s.mean_load - 4.0).abs() < 1e-10);
        assert!((s.unassigned_rate - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_empty_result() {
        let s = AssignmentStats::calculate(&AssignmentResult::default());
        assert_eq!(s.assigned_workers, 0);
        assert_eq!(s.load_spread(), 0);
        assert_eq!(s.mean_load, 0.0);
        assert_eq!(s.unassigned_rate, 0.0);
    }
}
