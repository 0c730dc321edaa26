//! Items served by the rotation.

use super::Statistics;

/// A single entry in the rotation: an immutable value and
/// its serve statistics.
#[derive(Debug)]
pub struct Item {
    value: String,
    statistics: Statistics,
}

impl Item {
    pub(super) fn new(value: String) -> Self {
        Self {
            value,
            statistics: Statistics::default(),
        }
    }

    /// The item's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Serve statistics for this item.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
