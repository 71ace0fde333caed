//! Bin-to-worker resolution under exclusion constraints.
//!
//! # Algorithm
//!
//! Bins form a LIFO stack; workers form a queue taken from the back and
//! re-queued at the front. While bins remain:
//!
//! 1. Pop a bin. With no workers left it is skipped for good.
//! 2. Pop a worker and form the `(worker, bin)` option.
//! 3. If the worker is not disqualified from any item in the bin, commit.
//!    The worker is consumed: one bin per worker per run.
//! 4. If the option was already rejected once, the bin is skipped for good
//!    and the popped worker is dropped for the rest of the run.
//! 5. Otherwise re-queue the worker at the front, push the bin back, and
//!    remember the option as rejected.
//!
//! Every option is rejected at most once and every bin ends exactly once
//! (commit or skip), so a run makes at most `workers × bins + bins`
//! attempts.
//!
//! This is a best-effort greedy handshake, not a maximum matching: a bin
//! can stay unassigned although another worker order would have placed
//! it. Unassigned bins are handed to an operator.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AssignmentOption, AssignmentResult, Bin, Worker};

/// Result of a resolution pass, with the number of pairing attempts made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Committed workers and skipped bins.
    pub result: AssignmentResult,
    /// Worker-bin pairings tried.
    pub attempts: usize,
}

/// Matches bins to workers one-to-one, honoring disqualifications.
///
/// # Example
///
/// ```
/// use u_assign::models::{Bin, Item, Worker};
/// use u_assign::resolver::AssignmentResolver;
///
/// let bins = vec![Bin::new(vec![Item::new("X").with_sub_unit("p1")])];
/// let workers = vec![
///     Worker::new("w1").with_disqualified("X"),
///     Worker::new("w2"),
/// ];
///
/// let resolution = AssignmentResolver::new(workers).resolve(bins).unwrap();
/// let result = resolution.result;
/// assert!(result.assignment_for_worker("w2").is_some());
/// assert!(result.assignment_for_worker("w1").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentResolver {
    workers: Vec<Worker>,
}

impl AssignmentResolver {
    /// Creates a resolver over a worker pool.
    ///
    /// The pool order matters: the last worker is tried first.
    pub fn new(workers: Vec<Worker>) -> Self {
        Self { workers }
    }

    /// Assigns bins to workers.
    ///
    /// The last bin is tried first.
    ///
    /// # Errors
    /// `Internal` if the worker queue runs dry after being checked
    /// non-empty.
    pub fn resolve(self, bins: Vec<Bin>) -> EngineResult<Resolution> {
        let mut workers = self.workers;
        let pool_size = workers.len();
        let bin_count = bins.len();

        let mut available_workers: VecDeque<usize> = (0..workers.len()).collect();
        let mut available_bins = bins;
        let mut skipped_bins: Vec<Bin> = Vec::new();
        let mut skipped_options: HashSet<AssignmentOption> = HashSet::new();
        let mut attempts = 0usize;

        while let Some(bin) = available_bins.pop() {
            if available_workers.is_empty() {
                skipped_bins.push(bin);
                continue;
            }

            let w = available_workers.pop_back().ok_or_else(|| {
                EngineError::Internal("worker queue empty while resolving assignments".into())
            })?;
            attempts += 1;

            let worker = &mut workers[w];
            let option = AssignmentOption::new(worker.id.as_str(), &bin);

            if worker.can_take(&bin) {
                debug!(
                    worker = %worker.id,
                    items = bin.len(),
                    weight = bin.total_weight(),
                    "assigned bin"
                );
                worker.assigned_items.extend(bin.items);
            } else if skipped_options.contains(&option) {
                debug!(
                    worker = %worker.id,
                    items = bin.len(),
                    "bin rejected twice by same worker, leaving unassigned"
                );
                skipped_bins.push(bin);
            } else {
                available_workers.push_front(w);
                available_bins.push(bin);
                skipped_options.insert(option);
            }
        }

        let result = AssignmentResult::new(workers, skipped_bins);

        if result.unassigned_bin_count > 0 {
            warn!(
                unassigned_bins = result.unassigned_bin_count,
                unassigned_sub_units = result.unassigned_sub_unit_count,
                "some bins could not be assigned"
            );
        }
        info!(
            workers = pool_size,
            bins = bin_count,
            assigned_workers = result.worker_assignments.len(),
            attempts,
            "resolved assignments"
        );

        Ok(Resolution { result, attempts })
    }
}
