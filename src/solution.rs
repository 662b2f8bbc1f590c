//! Boundary contract for candidate solutions.

use std::hash::Hash;

/// A candidate solution: one vertex of the lazily-materialized
/// solution-space graph.
///
/// Equality and hashing must be stable, value-based, and consistent with
/// each other, since solutions act as cache keys and as members of set
/// containers. The caching layer never inspects a solution beyond these
/// capabilities.
pub trait Solution: Clone + Eq + Hash {
    /// The lazy neighbor enumeration produced by [`neighbors`](Self::neighbors).
    type Neighbors: Iterator<Item = Self>;

    /// Objective value of this solution.
    ///
    /// Not consumed by the caching layer itself; search heuristics built on
    /// top of it rank candidates with this.
    fn score(&self) -> f32;

    /// Starts a fresh, finite enumeration of the adjacent solutions.
    ///
    /// The enumeration is lazy and restartable: each call must yield the
    /// same neighbor set from the beginning, and consumers may stop early.
    fn neighbors(&self) -> Self::Neighbors;
}
