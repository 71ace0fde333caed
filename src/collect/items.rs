//! Item collection and window resolution.

use tracing::debug;

use super::{ItemSource, PeriodSource};
use crate::error::{EngineError, EngineResult};
use crate::models::{Item, Period, TimeWindow};

/// Looks up a period and derives its collection window.
///
/// The window runs from the previous period's end (exclusive) to this
/// period's end (inclusive).
///
/// # Errors
/// `NotFound` if the period does not exist.
pub async fn resolve_window(
    periods: &dyn PeriodSource,
    period_id: &str,
) -> EngineResult<(Period, TimeWindow)> {
    let period = periods
        .period(period_id)
        .await?
        .ok_or_else(|| EngineError::NotFound("Period".into()))?;
    let start_ms = periods.previous_period_end(&period).await?;
    let window = TimeWindow::new(start_ms, period.end_ms);
    Ok((period, window))
}

/// Collects items inside `window`, sorted by weight descending.
///
/// The sort is stable so equal-weight items keep source order.
pub async fn collect_items(
    source: &dyn ItemSource,
    window: &TimeWindow,
) -> EngineResult<Vec<Item>> {
    let mut items = source.items_in_window(window).await?;
    items.sort_by(|a, b| b.weight.cmp(&a.weight));
    debug!(
        items = items.len(),
        start_ms = window.start_ms,
        end_ms = window.end_ms,
        "collected items"
    );
    Ok(items)
}
