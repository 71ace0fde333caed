//! Assignment configuration.
//!
//! [`AssignmentConfig`] holds the externally owned parameters of a run:
//! how many independent replicas every item needs and how bins are formed.
//! The values normally come from per-period settings via
//! [`AssignmentConfig::load`].

use crate::collect::SettingsSource;
use crate::error::{EngineError, EngineResult};

/// Setting key for the redundancy factor.
pub const REDUNDANCY_FACTOR_KEY: &str = "REDUNDANCY_FACTOR";
/// Setting key selecting even distribution (`true`/`false`).
pub const ASSIGN_EVENLY_KEY: &str = "ASSIGN_EVENLY";
/// Setting key for the per-worker target in target-count mode.
pub const TARGET_PER_WORKER_KEY: &str = "TARGET_PER_WORKER";

/// How items are grouped into bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionMode {
    /// Exactly one bin per worker, weights balanced by greedy partitioning.
    Even,
    /// First-fit packing towards a per-worker sub-unit target.
    TargetCount {
        /// Desired sub-units per worker.
        per_worker: usize,
    },
}

/// Configuration for one assignment run.
///
/// # Defaults
///
/// ```
/// use u_assign::config::{AssignmentConfig, DistributionMode};
///
/// let config = AssignmentConfig::default();
/// assert_eq!(config.redundancy_factor, 3);
/// assert_eq!(config.mode, DistributionMode::TargetCount { per_worker: 50 });
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_assign::config::AssignmentConfig;
///
/// let config = AssignmentConfig::even().with_redundancy_factor(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentConfig {
    /// Number of independent replicas each item must appear in.
    pub redundancy_factor: usize,

    /// Bin formation strategy.
    pub mode: DistributionMode,

    /// Multiplier applied to the per-worker target to get the bin capacity.
    ///
    /// Larger values mean fewer oversized singleton bins but less even
    /// bins. Only used in target-count mode.
    pub slack_factor: f64,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            redundancy_factor: 3,
            mode: DistributionMode::TargetCount { per_worker: 50 },
            slack_factor: 1.2,
        }
    }
}

impl AssignmentConfig {
    /// Even distribution with default redundancy.
    pub fn even() -> Self {
        Self {
            mode: DistributionMode::Even,
            ..Self::default()
        }
    }

    /// Target-count distribution with default redundancy.
    pub fn target_count(per_worker: usize) -> Self {
        Self {
            mode: DistributionMode::TargetCount { per_worker },
            ..Self::default()
        }
    }

    /// Sets the redundancy factor.
    pub fn with_redundancy_factor(mut self, n: usize) -> Self {
        self.redundancy_factor = n;
        self
    }

    /// Sets the distribution mode.
    pub fn with_mode(mut self, mode: DistributionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the bin capacity slack factor.
    pub fn with_slack_factor(mut self, factor: f64) -> Self {
        self.slack_factor = factor;
        self
    }

    /// Bin capacity for target-count mode: `ceil(per_worker × slack)`.
    ///
    /// `None` in even mode.
    pub fn target_bin_size(&self) -> Option<usize> {
        match self.mode {
            DistributionMode::Even => None,
            DistributionMode::TargetCount { per_worker } => Some(self.bin_capacity(per_worker)),
        }
    }

    /// Bin capacity for a per-worker target under this slack factor.
    pub fn bin_capacity(&self, per_worker: usize) -> usize {
        (per_worker as f64 * self.slack_factor).ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.redundancy_factor == 0 {
            return Err(EngineError::Validation(
                "redundancy_factor must be at least 1".into(),
            ));
        }
        if let DistributionMode::TargetCount { per_worker } = self.mode {
            if per_worker == 0 {
                return Err(EngineError::Validation(
                    "per-worker target must be at least 1".into(),
                ));
            }
        }
        if !self.slack_factor.is_finite() || self.slack_factor < 1.0 {
            return Err(EngineError::Validation(
                "slack_factor must be a finite value >= 1.0".into(),
            ));
        }
        Ok(())
    }

    /// Loads the configuration from period settings.
    ///
    /// The per-worker target is only read when even distribution is off.
    pub async fn load(settings: &dyn SettingsSource, period_id: &str) -> EngineResult<Self> {
        let redundancy_factor: usize =
            parse_setting(settings, period_id, REDUNDANCY_FACTOR_KEY).await?;
        let evenly: bool = parse_setting(settings, period_id, ASSIGN_EVENLY_KEY).await?;

        let mode = if evenly {
            DistributionMode::Even
        } else {
            let per_worker: usize =
                parse_setting(settings, period_id, TARGET_PER_WORKER_KEY).await?;
            DistributionMode::TargetCount { per_worker }
        };

        let config = Self::default()
            .with_redundancy_factor(redundancy_factor)
            .with_mode(mode);
        config.validate()?;
        Ok(config)
    }
}

async fn parse_setting<T: std::str::FromStr>(
    settings: &dyn SettingsSource,
    period_id: &str,
    key: &str,
) -> EngineResult<T> {
    let raw = settings
        .setting(period_id, key)
        .await?
        .ok_or_else(|| EngineError::NotFound(format!("Setting {key}")))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| EngineError::Validation(format!("setting {key} has invalid value '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_default_config() {
        let config = AssignmentConfig::default();
        assert_eq!(config.redundancy_factor, 3);
        assert!((config.slack_factor - 1.2).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_bin_size_applies_slack() {
        assert_eq!(AssignmentConfig::target_count(5).target_bin_size(), Some(6));
        assert_eq!(AssignmentConfig::target_count(10).target_bin_size(), Some(12));
        assert_eq!(AssignmentConfig::target_count(7).target_bin_size(), Some(9)); // ceil(8.4)
        assert_eq!(AssignmentConfig::even().target_bin_size(), None);
    }

    #[test]
    fn test_validate_rejects_zero_redundancy() {
        let config = AssignmentConfig::even().with_redundancy_factor(0);
        assert!(matches!(config.validate(), Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        let config = AssignmentConfig::target_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_shrinking_slack() {
        let config = AssignmentConfig::default().with_slack_factor(0.5);
        assert!(config.validate().is_err());
        let config = AssignmentConfig::default().with_slack_factor(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_even() {
        let store = MemoryStore::new()
            .with_setting(REDUNDANCY_FACTOR_KEY, "2")
            .with_setting(ASSIGN_EVENLY_KEY, "true");
        let config = AssignmentConfig::load(&store, "P1").await.unwrap();
        assert_eq!(config.redundancy_factor, 2);
        assert_eq!(config.mode, DistributionMode::Even);
    }

    #[tokio::test]
    async fn test_load_target_count_with_period_override() {
        let store = MemoryStore::new()
            .with_setting(REDUNDANCY_FACTOR_KEY, "3")
            .with_setting(ASSIGN_EVENLY_KEY, "false")
            .with_setting(TARGET_PER_WORKER_KEY, "10")
            .with_period_setting("P1", TARGET_PER_WORKER_KEY, "20");
        let config = AssignmentConfig::load(&store, "P1").await.unwrap();
        assert_eq!(config.mode, DistributionMode::TargetCount { per_worker: 20 });

        let other = AssignmentConfig::load(&store, "P2").await.unwrap();
        assert_eq!(other.mode, DistributionMode::TargetCount { per_worker: 10 });
    }

    #[tokio::test]
    async fn test_load_missing_setting() {
        let store = MemoryStore::new().with_setting(ASSIGN_EVENLY_KEY, "true");
        let err = AssignmentConfig::load(&store, "P1").await.unwrap_err();
        assert_eq!(err, EngineError::NotFound("Setting REDUNDANCY_FACTOR".into()));
    }

    #[tokio::test]
    async fn test_load_invalid_value() {
        let store = MemoryStore::new()
            .with_setting(REDUNDANCY_FACTOR_KEY, "three")
            .with_setting(ASSIGN_EVENLY_KEY, "true");
        let err = AssignmentConfig::load(&store, "P1").await.unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_zero_redundancy() {
        let store = MemoryStore::new()
            .with_setting(REDUNDANCY_FACTOR_KEY, "0")
            .with_setting(ASSIGN_EVENLY_KEY, "true");
        assert!(AssignmentConfig::load(&store, "P1").await.is_err());
    }
}
