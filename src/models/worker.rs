//! Worker model.
//!
//! Workers (quantifiers) receive bins of items. Each worker carries the set
//! of identities it may never be assigned work for: its own accounts and any
//! affiliated identity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Bin, Item};

/// An assignable agent with exclusion constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Identities this worker must never handle items for.
    pub disqualified_ids: BTreeSet<String>,
    /// Items committed to this worker during a run.
    pub assigned_items: Vec<Item>,
}

impl Worker {
    /// Creates a worker with no disqualifications.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            disqualified_ids: BTreeSet::new(),
            assigned_items: Vec::new(),
        }
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a disqualified identity.
    pub fn with_disqualified(mut self, identity: impl Into<String>) -> Self {
        self.disqualified_ids.insert(identity.into());
        self
    }

    /// Whether this worker may not handle the given item.
    #[inline]
    pub fn is_disqualified_from(&self, item: &Item) -> bool {
        self.disqualified_ids.contains(&item.id)
    }

    /// Whether every item in the bin is allowed for this worker.
    pub fn can_take(&self, bin: &Bin) -> bool {
        !bin.items.iter().any(|item| self.is_disqualified_from(item))
    }

    /// Whether any item has been committed to this worker.
    pub fn has_assignments(&self) -> bool {
        !self.assigned_items.is_empty()
    }

    /// Sub-units committed to this worker.
    pub fn assigned_sub_unit_count(&self) -> usize {
        self.assigned_items.iter().map(Item::sub_unit_count).sum()
    }
}
