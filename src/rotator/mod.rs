//! Round-robin rotation over a shared set of items.

pub mod config;
pub mod cursor;
pub mod error;
pub mod item;
pub mod registry;
pub mod rotator;
pub mod stats;

pub use config::Config;
pub use error::Error;
pub use item::Item;
pub use registry::Registry;
pub use rotator::Rotator;
pub use stats::Statistics;

use cursor::Cursor;
