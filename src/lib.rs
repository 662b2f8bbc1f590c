//! # solspace: bounded-memory caching for solution-space graphs
//!
//! **`solspace`** is a caching layer over lazily-materialized combinatorial
//! search graphs: vertices are candidate solutions, edges an
//! expensive-to-compute adjacency relation, and neighborhoods the per-vertex
//! adjacency sets. A local-search or metaheuristic algorithm layered on top
//! queries adjacency and neighbors cheaply after the first expensive
//! evaluation, within a fixed memory budget, with exact-only semantics: no
//! approximation and no staleness beyond strict FIFO eviction.
//!
//! ## Key Pieces
//!
//! - **[`Subset`][crate::subset::Subset]**: a dynamic subset of `[0, n)`
//!   with O(1) membership, insertion, and removal --- the low-level building
//!   block for tracking sets of candidate indices.
//! - **[`FifoCache`][crate::cache::FifoCache]**: a generic bounded cache
//!   with strict insertion-order eviction and `None`-signaled misses.
//! - **[`SolutionSpace`][crate::space::SolutionSpace]**: composes an edge
//!   cache and a neighborhood cache in front of an [`Instance`][crate::instance::Instance]
//!   oracle, plus a randomized, cache-bypassing neighbor sampler driven by a
//!   caller-supplied [`CoinFlipper`][crate::random::CoinFlipper].
//!
//! Solution representations, scoring, instance generation, and persistence
//! are domain plug-ins behind the [`Solution`][crate::solution::Solution]
//! and [`Instance`][crate::instance::Instance] traits, not part of this
//! crate. None of the components is safe for concurrent mutation; sharing
//! across search workers is the caller's responsibility.
//!
//! ## Basic Usage
//!
//! ```rust
//! use solspace::instance::Instance;
//! use solspace::solution::Solution;
//! use solspace::space::SolutionSpace;
//!
//! // Points on a line; each point is adjacent to its two neighbors.
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Point(i64);
//!
//! impl Solution for Point {
//!     type Neighbors = std::vec::IntoIter<Point>;
//!
//!     fn score(&self) -> f32 {
//!         -(self.0.abs() as f32)
//!     }
//!
//!     fn neighbors(&self) -> Self::Neighbors {
//!         vec![Point(self.0 - 1), Point(self.0 + 1)].into_iter()
//!     }
//! }
//!
//! struct Line;
//!
//! impl Instance<Point> for Line {
//!     fn edge(&self, source: &Point, dest: &Point) -> bool {
//!         (source.0 - dest.0).abs() == 1
//!     }
//! }
//!
//! // 1024 cached edge facts, neighborhood cache disabled.
//! let mut space = SolutionSpace::new(Line, 1024, 0);
//!
//! assert!(space.edge_exists(&Point(0), &Point(1))); // oracle query
//! assert!(space.edge_exists(&Point(0), &Point(1))); // served from cache
//! assert_eq!(space.neighbors(&Point(0)).len(), 2);
//! ```

pub mod cache;
pub mod error;
pub mod instance;
pub mod random;
pub mod solution;
pub mod space;
pub mod subset;
