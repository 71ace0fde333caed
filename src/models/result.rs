//! Assignment result model.
//!
//! The output of one run: every worker that received a bin, plus the bins
//! nobody could take. Unassigned bins are left for an operator to resolve
//! by hand.

use serde::{Deserialize, Serialize};

use super::{Bin, Worker};

/// Outcome of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Workers with at least one assigned item.
    pub worker_assignments: Vec<Worker>,
    /// Number of bins no worker could take.
    pub unassigned_bin_count: usize,
    /// Sub-units contained in the unassigned bins.
    pub unassigned_sub_unit_count: usize,
    /// The unassigned bins themselves.
    pub unassigned_bins: Vec<Bin>,
}

impl AssignmentResult {
    /// Builds a result from committed workers and skipped bins.
    ///
    /// Workers without assignments are dropped.
    pub fn new(workers: Vec<Worker>, unassigned_bins: Vec<Bin>) -> Self {
        let worker_assignments: Vec<Worker> = workers
            .into_iter()
            .filter(Worker::has_assignments)
            .collect();
        let unassigned_sub_unit_count = unassigned_bins.iter().map(Bin::sub_unit_count).sum();
        Self {
            worker_assignments,
            unassigned_bin_count: unassigned_bins.len(),
            unassigned_sub_unit_count,
            unassigned_bins,
        }
    }

    /// Sub-units committed across all workers.
    pub fn assigned_sub_unit_count(&self) -> usize {
        self.worker_assignments
            .iter()
            .map(Worker::assigned_sub_unit_count)
            .sum()
    }

    /// Assigned plus unassigned sub-units.
    pub fn accounted_sub_unit_count(&self) -> usize {
        self.assigned_sub_unit_count() + self.unassigned_sub_unit_count
    }

    /// Finds the assignment for a given worker.
    pub fn assignment_for_worker(&self, worker_id: &str) -> Option<&Worker> {
        self.worker_assignments.iter().find(|w| w.id == worker_id)
    }

    /// Whether every bin found a worker.
    pub fn is_complete(&self) -> bool {
        self.unassigned_bin_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn sample_result() -> AssignmentResult {
        let mut w1 = Worker::new("w1");
        w1.assigned_items
            .push(Item::new("A").with_sub_units(["p1", "p2"]));
        let w2 = Worker::new("w2");
        let leftover = Bin::new(vec![Item::new("B").with_sub_unit("p3")]);
        AssignmentResult::new(vec![w1, w2], vec![leftover])
    }

    #[test]
    fn test_idle_workers_dropped() {
        let r = sample_result();
        assert_eq!(r.worker_assignments.len(), 1);
        assert!(r.assignment_for_worker("w1").is_some());
        assert!(r.assignment_for_worker("w2").is_none());
    }

    #[test]
    fn test_counts() {
        let r = sample_result();
        assert_eq!(r.unassigned_bin_count, 1);
        assert_eq!(r.unassigned_sub_unit_count, 1);
        assert_eq!(r.assigned_sub_unit_count(), 2);
        assert_eq!(r.accounted_sub_unit_count(), 3);
        assert!(!r.is_complete());
    }

    #[test]
    fn test_empty_result() {
        let r = AssignmentResult::new(Vec::new(), Vec::new());
        assert!(r.is_complete());
        assert_eq!(r.accounted_sub_unit_count(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let r = sample_result();
        let json = serde_json::to_string(&r).unwrap();
        let back: AssignmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
