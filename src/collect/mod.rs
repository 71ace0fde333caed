//! Input collection.
//!
//! The engine never talks to a database directly. It reads periods, items,
//! workers, and settings through the collaborator traits defined here, and
//! normalizes what it gets back:
//!
//! - [`resolve_window`]: period lookup → `(previous end, period end]` window
//! - [`collect_items`]: items in the window, heaviest first
//! - [`collect_workers`]: eligible workers in uniformly random order
//!
//! All collaborator calls are read-only, so the item and worker fetches may
//! run concurrently.

mod items;
mod workers;

pub use items::{collect_items, resolve_window};
pub use workers::collect_workers;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Item, Period, TimeWindow, Worker};

/// Period lookup.
#[async_trait]
pub trait PeriodSource: Send + Sync {
    /// Finds a period by ID.
    async fn period(&self, period_id: &str) -> EngineResult<Option<Period>>;

    /// End of the period preceding `period` (ms).
    ///
    /// Returns 0 (the epoch) when `period` is the first one.
    async fn previous_period_end(&self, period: &Period) -> EngineResult<i64>;
}

/// Work item source.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// One item per identity that received sub-units inside `window`.
    ///
    /// Order is not significant; [`collect_items`] sorts.
    async fn items_in_window(&self, window: &TimeWindow) -> EngineResult<Vec<Item>>;

    /// Total sub-units inside `window`, counted independently of
    /// [`ItemSource::items_in_window`].
    async fn count_sub_units(&self, window: &TimeWindow) -> EngineResult<usize>;
}

/// Worker pool source.
#[async_trait]
pub trait WorkerSource: Send + Sync {
    /// Every worker currently eligible, with disqualifications filled in.
    async fn eligible_workers(&self) -> EngineResult<Vec<Worker>>;
}

/// Per-period settings.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// Raw setting value for a period, falling back to the global value.
    async fn setting(&self, period_id: &str, key: &str) -> EngineResult<Option<String>>;
}
