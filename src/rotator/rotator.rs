//! Round-robin rotation over registered items.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Config, Cursor, Error, Item, Registry};

/// Serves registered items in cyclic order, one call at a time.
pub struct Rotator {
    registry: Registry,
    cursor: Mutex<Cursor>,
    config: Config,
}

impl Rotator {
    /// Create a new rotator with default settings, seeded with
    /// the given items. At least one item is required.
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, Error> {
        Self::with_config(Config::default(), items)
    }

    /// Create a new rotator with custom settings.
    pub fn with_config(
        config: Config,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, Error> {
        let registry = Registry::new();
        registry.add(items);

        if registry.is_empty() {
            return Err(Error::NoItems);
        }

        Ok(Self {
            registry,
            cursor: Mutex::new(Cursor::start()),
            config,
        })
    }

    /// Get the next item in rotation order.
    ///
    /// The same item is returned `hold_amount` times in a row
    /// before the rotation moves on.
    pub fn next(&self) -> Arc<Item> {
        let item = {
            let mut cursor = self.cursor.lock();

            cursor.advance(self.config.hold_amount());

            // Sequence length is read at call time; items added
            // concurrently are picked up by later calls.
            let items = self.registry.items();
            let index = cursor.index(items.len());

            match items.get(index) {
                Some(item) => item.clone(),
                // Out-of-range positions land on the first item.
                None => items[0].clone(),
            }
        };

        item.statistics().increment_serves(1);

        item
    }

    /// Add items to the rotation. Duplicates are ignored.
    pub fn add(&self, values: impl IntoIterator<Item = impl Into<String>>) {
        self.registry.add(values);
    }

    /// Snapshot of the items in rotation order.
    pub fn items(&self) -> Arc<Vec<Arc<Item>>> {
        self.registry.items()
    }

    /// Registry handle.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Number of items in rotation.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// The rotation has no items.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
