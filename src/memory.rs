//! In-memory collaborator.
//!
//! [`MemoryStore`] implements every collection trait over plain vectors.
//! It groups raw sub-unit records by receiving identity, maps worker
//! accounts to disqualifications, and resolves settings per period with a
//! global fallback. Useful for dry runs over exported data and for tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

use crate::collect::{ItemSource, PeriodSource, SettingsSource, WorkerSource};
use crate::error::EngineResult;
use crate::models::{Item, Period, TimeWindow, Worker};

/// One sub-unit record (e.g. a single praise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubUnitRecord {
    /// Record ID.
    pub id: String,
    /// Identity that received the sub-unit.
    pub receiver_id: String,
    /// Creation time (ms).
    pub created_at_ms: i64,
}

#[derive(Debug, Clone)]
struct WorkerRecord {
    id: String,
    name: String,
    account_ids: Vec<String>,
    eligible: bool,
}

/// Vector-backed implementation of all collaborator traits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    periods: Vec<Period>,
    records: Vec<SubUnitRecord>,
    workers: Vec<WorkerRecord>,
    global_settings: HashMap<String, String>,
    period_settings: HashMap<(String, String), String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a period.
    pub fn with_period(mut self, period: Period) -> Self {
        self.periods.push(period);
        self
    }

    /// Adds a sub-unit record.
    pub fn with_record(
        mut self,
        id: impl Into<String>,
        receiver_id: impl Into<String>,
        created_at_ms: i64,
    ) -> Self {
        self.records.push(SubUnitRecord {
            id: id.into(),
            receiver_id: receiver_id.into(),
            created_at_ms,
        });
        self
    }

    /// Adds an eligible worker owning the given accounts.
    ///
    /// The worker is disqualified from every identity it owns.
    pub fn with_worker<I, S>(mut self, id: impl Into<String>, account_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        self.workers.push(WorkerRecord {
            name: id.clone(),
            id,
            account_ids: account_ids.into_iter().map(Into::into).collect(),
            eligible: true,
        });
        self
    }

    /// Adds a worker that is not part of the eligible pool.
    pub fn with_ineligible_worker(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.workers.push(WorkerRecord {
            name: id.clone(),
            id,
            account_ids: Vec::new(),
            eligible: false,
        });
        self
    }

    /// Sets a global setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_settings.insert(key.into(), value.into());
        self
    }

    /// Sets a period-specific setting, overriding the global value.
    pub fn with_period_setting(
        mut self,
        period_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.period_settings
            .insert((period_id.into(), key.into()), value.into());
        self
    }
}

#[async_trait]
impl PeriodSource for MemoryStore {
    async fn period(&self, period_id: &str) -> EngineResult<Option<Period>> {
        Ok(self.periods.iter().find(|p| p.id == period_id).cloned())
    }

    async fn previous_period_end(&self, period: &Period) -> EngineResult<i64> {
        Ok(self
            .periods
            .iter()
            .map(|p| p.end_ms)
            .filter(|&end| end < period.end_ms)
            .max()
            .unwrap_or(0))
    }
}

#[async_trait]
impl ItemSource for MemoryStore {
    async fn items_in_window(&self, window: &TimeWindow) -> EngineResult<Vec<Item>> {
        let mut grouped: BTreeMap<&str, Item> = BTreeMap::new();
        for record in self.records.iter().filter(|r| window.contains(r.created_at_ms)) {
            let item = grouped
                .entry(record.receiver_id.as_str())
                .or_insert_with(|| Item::new(record.receiver_id.as_str()));
            item.sub_unit_ids.push(record.id.clone());
            item.weight += 1;
        }
        Ok(grouped.into_values().collect())
    }

    async fn count_sub_units(&self, window: &TimeWindow) -> EngineResult<usize> {
        Ok(self
            .records
            .iter()
            .filter(|r| window.contains(r.created_at_ms))
            .count())
    }
}

#[async_trait]
impl WorkerSource for MemoryStore {
    async fn eligible_workers(&self) -> EngineResult<Vec<Worker>> {
        Ok(self
            .workers
            .iter()
            .filter(|w| w.eligible)
            .map(|w| {
                w.account_ids.iter().fold(
                    Worker::new(w.id.as_str()).with_name(w.name.as_str()),
                    |worker, account| worker.with_disqualified(account.as_str()),
                )
            })
            .collect())
    }
}

#[async_trait]
impl SettingsSource for MemoryStore {
    async fn setting(&self, period_id: &str, key: &str) -> EngineResult<Option<String>> {
        Ok(self
            .period_settings
            .get(&(period_id.to_string(), key.to_string()))
            .or_else(|| self.global_settings.get(key))
            .cloned())
    }
}
