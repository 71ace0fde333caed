//! Assignment engine.
//!
//! # Pipeline
//!
//! 1. Resolve the period window and load settings.
//! 2. Fetch items and workers concurrently; shuffle the worker pool.
//! 3. Validate inputs.
//! 4. Build bins: `R` rotated replicas, then either first-fit per shuffled
//!    replica (target-count mode) or greedy partitioning into one bin per
//!    worker (even mode).
//! 5. Resolve bins to workers under disqualification constraints.
//! 6. Verify that every sub-unit is accounted for `R` times, against an
//!    independent count.
//!
//! A run has no side effects. The caller persists the result and must
//! serialize runs for the same period.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::collect::{
    collect_items, collect_workers, resolve_window, ItemSource, PeriodSource, SettingsSource,
    WorkerSource,
};
use crate::config::{AssignmentConfig, DistributionMode};
use crate::error::EngineResult;
use crate::models::{AssignmentResult, Bin, Item, Worker};
use crate::packing::{rotate_replicas, EvenPartitioner, FirstFitPacker};
use crate::resolver::AssignmentResolver;
use crate::stats::AssignmentStats;
use crate::validation::validate_input;
use crate::verify::verify_coverage;

/// Computes redundant worker assignments for a period.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_assign::engine::AssignmentEngine;
/// use u_assign::memory::MemoryStore;
/// use u_assign::models::Period;
///
/// let store = MemoryStore::new()
///     .with_period(Period::new("P1", 1_000))
///     .with_record("s1", "alice", 10)
///     .with_record("s2", "bob", 20)
///     .with_worker("w1", ["alice"])
///     .with_worker("w2", ["carol"])
///     .with_setting("REDUNDANCY_FACTOR", "1")
///     .with_setting("ASSIGN_EVENLY", "false")
///     .with_setting("TARGET_PER_WORKER", "1");
///
/// let engine = AssignmentEngine::from_store(Arc::new(store)).with_seed(42);
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let result = rt.block_on(engine.compute_assignments("P1")).unwrap();
/// assert_eq!(result.accounted_sub_unit_count(), 2);
/// assert!(result.assignment_for_worker("w2").is_some());
/// ```
#[derive(Clone)]
pub struct AssignmentEngine {
    periods: Arc<dyn PeriodSource>,
    items: Arc<dyn ItemSource>,
    workers: Arc<dyn WorkerSource>,
    settings: Arc<dyn SettingsSource>,
    seed: Option<u64>,
}

impl AssignmentEngine {
    /// Creates an engine over separate collaborators.
    pub fn new(
        periods: Arc<dyn PeriodSource>,
        items: Arc<dyn ItemSource>,
        workers: Arc<dyn WorkerSource>,
        settings: Arc<dyn SettingsSource>,
    ) -> Self {
        Self {
            periods,
            items,
            workers,
            settings,
            seed: None,
        }
    }

    /// Creates an engine over one store implementing every collaborator.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: PeriodSource + ItemSource + WorkerSource + SettingsSource + 'static,
    {
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }

    /// Fixes the random seed, making every run reproducible.
    ///
    /// Without a seed each run draws a fresh one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Computes assignments for a period without persisting anything.
    ///
    /// # Errors
    /// - `NotFound`: unknown period or missing setting
    /// - `Validation`: bad settings, malformed input, or a pool smaller
    ///   than the redundancy factor in even mode
    /// - `CoverageMismatch` / `Internal`: engine defect, never swallowed
    pub async fn compute_assignments(&self, period_id: &str) -> EngineResult<AssignmentResult> {
        let (period, window) = resolve_window(self.periods.as_ref(), period_id).await?;
        let config = AssignmentConfig::load(self.settings.as_ref(), &period.id).await?;

        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!(period = %period.id, seed, "starting assignment run");

        let (items, workers) = tokio::try_join!(
            collect_items(self.items.as_ref(), &window),
            collect_workers(self.workers.as_ref(), &mut rng),
        )?;
        validate_input(&items, &workers)?;

        let result = Self::plan(items, workers, &config, &mut rng)?;

        let total_base_sub_units = self.items.count_sub_units(&window).await?;
        verify_coverage(total_base_sub_units, config.redundancy_factor, &result)?;

        let stats = AssignmentStats::calculate(&result);
        info!(
            period = %period.id,
            assigned_workers = stats.assigned_workers,
            min_load = stats.min_load,
            max_load = stats.max_load,
            mean_load = stats.mean_load,
            unassigned_bins = result.unassigned_bin_count,
            unassigned_sub_units = result.unassigned_sub_unit_count,
            "computed assignments"
        );

        Ok(result)
    }

    /// Packs and resolves already-collected inputs.
    ///
    /// `items` should be sorted by weight descending and `workers` already
    /// shuffled; see [`collect_items`] and [`collect_workers`]. Does not
    /// verify coverage.
    pub fn plan<R: Rng>(
        items: Vec<Item>,
        workers: Vec<Worker>,
        config: &AssignmentConfig,
        rng: &mut R,
    ) -> EngineResult<AssignmentResult> {
        config.validate()?;
        let redundancy = config.redundancy_factor;

        let bins: Vec<Bin> = match config.mode {
            DistributionMode::Even => {
                let partitioner = EvenPartitioner::new(workers.len());
                partitioner.check_capacity(redundancy)?;
                let replicas = rotate_replicas(&items, redundancy)?;
                partitioner.partition(&replicas)?
            }
            DistributionMode::TargetCount { per_worker } => {
                let packer = FirstFitPacker::new(config.bin_capacity(per_worker));
                let mut replicas = rotate_replicas(&items, redundancy)?;
                replicas
                    .iter_mut()
                    .flat_map(|replica| {
                        replica.shuffle(rng);
                        packer.pack(replica)
                    })
                    .collect()
            }
        };

        debug!(
            items = items.len(),
            workers = workers.len(),
            bins = bins.len(),
            redundancy,
            "formed bins"
        );

        let resolution = AssignmentResolver::new(workers).resolve(bins)?;
        Ok(resolution.result)
    }
}
