//! Period and collection window models.
//!
//! # Time Model
//! All times are in milliseconds since the Unix epoch. A period is
//! identified by its end; its collection window starts where the previous
//! period ended (or at the epoch for the first period).

use serde::{Deserialize, Serialize};

/// A closed assignment period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Unique period identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Period end (ms, inclusive).
    pub end_ms: i64,
}

/// A time interval (start, end].
///
/// Half-open on the left: excludes start, includes end. Consecutive periods
/// therefore never share a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (ms, exclusive).
    pub start_ms: i64,
    /// Interval end (ms, inclusive).
    pub end_ms: i64,
}

impl Period {
    /// Creates a period ending at `end_ms`.
    pub fn new(id: impl Into<String>, end_ms: i64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            end_ms,
        }
    }

    /// Sets the period name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl TimeWindow {
    /// Creates a new window.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this window (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms > self.start_ms && time_ms <= self.end_ms
    }
}
