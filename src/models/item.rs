//! Work item model.
//!
//! An item is everything one identity received during a period (e.g. all
//! praise given to one receiver). Its weight is the number of sub-units it
//! carries; the sub-unit IDs travel with it so assignments can be traced
//! back to individual records.

use serde::{Deserialize, Serialize};

/// A weighted unit of work.
///
/// `id` is the identity the item belongs to. Workers disqualified from that
/// identity must never receive the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity this item belongs to (unique within a collection run).
    pub id: String,
    /// Number of sub-units (always `sub_unit_ids.len()` for well-formed input).
    pub weight: usize,
    /// Opaque sub-unit identifiers.
    pub sub_unit_ids: Vec<String>,
}

impl Item {
    /// Creates an empty item for the given identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: 0,
            sub_unit_ids: Vec::new(),
        }
    }

    /// Adds one sub-unit.
    pub fn with_sub_unit(mut self, sub_unit_id: impl Into<String>) -> Self {
        self.sub_unit_ids.push(sub_unit_id.into());
        self.weight = self.sub_unit_ids.len();
        self
    }

    /// Adds several sub-units.
    pub fn with_sub_units<I, S>(mut self, sub_unit_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_unit_ids
            .extend(sub_unit_ids.into_iter().map(Into::into));
        self.weight = self.sub_unit_ids.len();
        self
    }

    /// Number of sub-units carried.
    #[inline]
    pub fn sub_unit_count(&self) -> usize {
        self.sub_unit_ids.len()
    }

    /// Whether the declared weight matches the carried sub-units.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.weight == self.sub_unit_ids.len()
    }
}
