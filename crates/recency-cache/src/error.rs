//! Error types for recency-cache.
//!
//! The taxonomy is deliberately small: the only failure mode at this layer
//! is constructing a cache with a capacity that can never hold an entry.
//! A lookup miss is a normal outcome and surfaces as `None`, never as an
//! error.

use thiserror::Error;

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when constructing a cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity was zero. A zero-capacity cache could never
    /// hold an entry and would evict on every insertion.
    #[error("cache capacity must be a positive entry count")]
    ZeroCapacity,
}
