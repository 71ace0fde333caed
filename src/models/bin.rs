//! Bin model.
//!
//! A bin is one packing unit: the group of items handed to a single worker.

use serde::{Deserialize, Serialize};

use super::Item;

/// An ordered group of items assigned as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    /// Items in this bin.
    pub items: Vec<Item>,
}

/// A `(worker, bin)` pairing, used to remember rejected attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentOption {
    /// Worker ID.
    pub worker_id: String,
    /// Bin fingerprint (see [`Bin::fingerprint`]).
    pub bin_fingerprint: String,
}

impl Bin {
    /// Creates a bin from items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Appends an item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sum of item weights.
    pub fn total_weight(&self) -> usize {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Sum of sub-units actually carried.
    pub fn sub_unit_count(&self) -> usize {
        self.items.iter().map(Item::sub_unit_count).sum()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bin holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order-independent identifier of the bin contents.
    ///
    /// Sorted sub-unit IDs joined with `+`.
    pub fn fingerprint(&self) -> String {
        let mut ids: Vec<&str> = self
            .items
            .iter()
            .flat_map(|i| i.sub_unit_ids.iter().map(String::as_str))
            .collect();
        ids.sort_unstable();
        ids.join("+")
    }

    /// Identities of the items in this bin.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.id.as_str())
    }
}

impl From<Vec<Item>> for Bin {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl AssignmentOption {
    /// Pairs a worker with a bin.
    pub fn new(worker_id: impl Into<String>, bin: &Bin) -> Self {
        Self {
            worker_id: worker_id.into(),
            bin_fingerprint: bin.fingerprint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, subs: &[&str]) -> Item {
        Item::new(id).with_sub_units(subs.iter().copied())
    }

    #[test]
    fn test_total_weight() {
        let bin = Bin::new(vec![item("A", &["p1", "p2"]), item("B", &["p3"])]);
        assert_eq!(bin.total_weight(), 3);
        assert_eq!(bin.sub_unit_count(), 3);
        assert_eq!(bin.len(), 2);
        assert!(!bin.is_empty());
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let a = Bin::new(vec![item("A", &["p2", "p1"]), item("B", &["p3"])]);
        let b = Bin::new(vec![item("B", &["p3"]), item("A", &["p1", "p2"])]);
        assert_eq!(a.fingerprint(), "p1+p2+p3");
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_option_equality() {
        let bin = Bin::new(vec![item("A", &["p1"])]);
        assert_eq!(
            AssignmentOption::new("w1", &bin),
            AssignmentOption::new("w1", &bin.clone())
        );
        assert_ne!(
            AssignmentOption::new("w1", &bin),
            AssignmentOption::new("w2", &bin)
        );
    }

    #[test]
    fn test_identities() {
        let bin = Bin::new(vec![item("A", &["p1"]), item("B", &["p2"])]);
        assert_eq!(bin.identities().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
