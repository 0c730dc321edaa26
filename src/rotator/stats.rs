//! Per-item serve statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Serve counter for a single item.
///
/// Updated with relaxed atomics, independently of the
/// rotation lock.
#[derive(Debug, Default)]
pub struct Statistics {
    serves: AtomicU64,
}

impl Statistics {
    /// Number of times the item has been served.
    pub fn serves(&self) -> u64 {
        self.serves.load(Ordering::Relaxed)
    }

    /// Increase the serve count.
    pub fn increment_serves(&self, amount: u64) {
        self.serves.fetch_add(amount, Ordering::Relaxed);
    }

    /// Reset the serve count to zero.
    pub fn reset_serves(&self) {
        self.serves.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counter() {
        let stats = Statistics::default();
        assert_eq!(stats.serves(), 0);

        stats.increment_serves(1);
        stats.increment_serves(2);
        assert_eq!(stats.serves(), 3);

        stats.reset_serves();
        assert_eq!(stats.serves(), 0);
    }
}
