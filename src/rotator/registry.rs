//! Ordered, deduplicated item storage.

use std::sync::Arc;

use arc_swap::ArcSwap;
use fnv::FnvHashSet;
use parking_lot::Mutex;
use tracing::debug;

use super::Item;

/// Insertion-ordered collection of unique items.
///
/// Readers work on immutable snapshots. Appends publish a new
/// snapshot; entries already handed out keep their position.
pub struct Registry {
    items: ArcSwap<Vec<Arc<Item>>>,
    /// Values seen so far. Guards the check-then-append sequence.
    members: Mutex<FnvHashSet<String>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            items: ArcSwap::from_pointee(Vec::new()),
            members: Mutex::new(FnvHashSet::default()),
        }
    }

    /// Append values not seen before, in the order given.
    /// Values already present are ignored.
    pub fn add(&self, values: impl IntoIterator<Item = impl Into<String>>) {
        let mut members = self.members.lock();

        let mut items = (**self.items.load()).clone();
        let known = items.len();

        for value in values {
            let value = value.into();

            if members.insert(value.clone()) {
                items.push(Arc::new(Item::new(value)));
            }
        }

        if items.len() > known {
            debug!("{} new item(s) in rotation", items.len() - known);
            self.items.store(Arc::new(items));
        }
    }

    /// Snapshot of the rotation sequence, in insertion order.
    pub fn items(&self) -> Arc<Vec<Arc<Item>>> {
        self.items.load_full()
    }

    /// Number of items registered.
    pub fn len(&self) -> usize {
        self.items.load().len()
    }

    /// The registry has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dedup_order() {
        let registry = Registry::new();
        registry.add(["a", "a", "b"]);
        registry.add(["b", "c", "a"]);

        let values = registry
            .items()
            .iter()
            .map(|item| item.value().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_snapshots_stay_valid() {
        let registry = Registry::new();
        registry.add(["a"]);

        let snapshot = registry.items();
        registry.add(["b"]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].value(), "a");
        assert_eq!(registry.items().len(), 2);
    }
}
