//! Rotator configuration.

use serde::{Deserialize, Serialize};

/// Rotation settings.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Consecutive serves of the same item before the rotation
    /// moves on to the next one. Zero behaves like 1.
    pub hold_amount: u64,
}

impl Config {
    /// Effective hold amount; values below 1 are treated as 1.
    pub fn hold_amount(&self) -> u64 {
        self.hold_amount.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { hold_amount: 1 }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.hold_amount(), 1);
    }

    #[test]
    fn test_zero_clamps() {
        let config = Config { hold_amount: 0 };
        assert_eq!(config.hold_amount(), 1);
        // The stored value is left alone.
        assert_eq!(config.hold_amount, 0);
    }

    #[test]
    fn test_deserialize() {
        let config: Config = toml::from_str("hold_amount = 2").unwrap();
        assert_eq!(config.hold_amount(), 2);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.hold_amount, 1);
    }
}
