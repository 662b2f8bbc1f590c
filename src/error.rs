//! Error types for the caching core.
//!
//! All contract violations surface through a single [`Error`] enum. Cache
//! misses are deliberately *not* represented here: [`FifoCache::get`] signals
//! a miss with `None`, and every caller treats that as ordinary control flow
//! rather than a failure.
//!
//! [`FifoCache::get`]: crate::cache::FifoCache::get

use thiserror::Error;

/// Unified error type for the solution-space caching core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An element outside `[0, capacity)` was passed to a subset operation.
    #[error("element {element} out of range for subset of capacity {capacity}")]
    OutOfRange { element: usize, capacity: usize },

    /// A success probability outside `[0, 1]` was passed to the coin-flip
    /// service.
    #[error("invalid success probability {0}, must lie within [0, 1]")]
    InvalidProbability(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
