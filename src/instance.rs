//! Boundary contract for problem instances.

use crate::solution::Solution;

/// A problem instance: the ground-truth adjacency oracle for its solutions.
///
/// [`edge`](Self::edge) must behave as a pure function of its two arguments;
/// the caching layer assumes repeated queries are interchangeable and caches
/// both positive and negative answers. Instances carry no caching
/// responsibility of their own.
pub trait Instance<S: Solution> {
    /// Queries an edge from `source` to `dest`.
    ///
    /// The default implementation scans the neighbor enumeration of
    /// `source`, which is very inefficient for most solution spaces.
    /// Override with a structure-aware check wherever possible.
    fn edge(&self, source: &S, dest: &S) -> bool {
        source.neighbors().any(|n| &n == dest)
    }
}
