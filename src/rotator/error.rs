//! Rotator errors.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Copy, Clone)]
pub enum Error {
    #[error("no items")]
    NoItems,
}
