//! Caching wrapper over a lazily-materialized solution-space graph.
//!
//! Vertices of the graph are candidate solutions; edges are answered by an
//! [`Instance`] oracle whose queries may be expensive. [`SolutionSpace`]
//! keeps two bounded FIFO caches in front of that oracle:
//!
//! - **Edges**: both positive and negative edge queries, keyed by the
//!   ordered pair exactly as asked.
//! - **Neighborhoods**: *complete* neighbor sets of queried vertices.
//!   Keep this one small or disabled: the average degree in most solution
//!   spaces is extremely large.
//!
//! A randomized sampler walks the lazy neighbor enumeration directly and
//! bypasses both caches.

use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;

use crate::cache::FifoCache;
use crate::error::Result;
use crate::instance::Instance;
use crate::random::CoinFlipper;
use crate::solution::Solution;

/// A solution-space graph that materializes vertices as they are queried,
/// caching edge facts and neighborhoods within a fixed memory budget.
///
/// Both caches are built once at construction and live for the lifetime of
/// the space; a capacity of zero permanently disables the corresponding
/// cache, turning that query type into a pure passthrough.
pub struct SolutionSpace<S: Solution, I: Instance<S>> {
    instance: I,
    edge_cache: Option<FifoCache<(S, S), bool>>,
    neighborhood_cache: Option<FifoCache<S, HashSet<S>>>,
}

impl<S: Solution, I: Instance<S>> SolutionSpace<S, I> {
    /// Creates a caching space over `instance`.
    ///
    /// `edge_cache_capacity` and `neighborhood_cache_capacity` bound the two
    /// caches; zero disables the respective cache for the space's lifetime.
    pub fn new(
        instance: I,
        edge_cache_capacity: usize,
        neighborhood_cache_capacity: usize,
    ) -> Self {
        let edge_cache = (edge_cache_capacity > 0).then(|| FifoCache::new(edge_cache_capacity));
        let neighborhood_cache =
            (neighborhood_cache_capacity > 0).then(|| FifoCache::new(neighborhood_cache_capacity));

        Self {
            instance,
            edge_cache,
            neighborhood_cache,
        }
    }

    /// Returns the underlying instance.
    pub fn instance(&self) -> &I {
        &self.instance
    }

    /// Queries whether an edge runs from `v1` to `v2`.
    ///
    /// The cache key is the **ordered** pair exactly as queried: `(v1, v2)`
    /// and `(v2, v1)` are cached independently even when the underlying
    /// relation is symmetric, so nothing is assumed about the oracle's
    /// algebraic properties.
    pub fn edge_exists(&mut self, v1: &S, v2: &S) -> bool {
        let Some(cache) = self.edge_cache.as_mut() else {
            return self.instance.edge(v1, v2);
        };

        let key = (v1.clone(), v2.clone());
        if let Some(&cached) = cache.get(&key) {
            trace!("edge cache hit");
            return cached;
        }
        debug!("edge cache miss, querying instance");
        let result = self.instance.edge(v1, v2);
        cache.insert(key, result);
        result
    }

    /// Returns the exact, exhaustive neighborhood of `v`.
    ///
    /// With the neighborhood cache disabled this materializes the full lazy
    /// enumeration on every call.
    pub fn neighbors(&mut self, v: &S) -> HashSet<S> {
        let Some(cache) = self.neighborhood_cache.as_mut() else {
            return v.neighbors().collect();
        };

        if let Some(cached) = cache.get(v) {
            trace!("neighborhood cache hit");
            return cached.clone();
        }
        debug!("neighborhood cache miss, materializing full neighborhood");
        let neighborhood: HashSet<S> = v.neighbors().collect();
        cache.insert(v.clone(), neighborhood.clone());
        neighborhood
    }

    /// Samples the neighborhood of `v`, including each neighbor
    /// independently with probability `inclusion_probability`.
    ///
    /// Walks the lazy enumeration directly: the exact-neighborhood cache is
    /// neither consulted nor populated, so the cost stays proportional to
    /// the enumeration rather than to the cache contents. Probability
    /// validation is delegated to the coin-flip service, so an out-of-range
    /// probability surfaces on the first flip; an empty enumeration performs
    /// no flips.
    pub fn sample_neighbors<R: Rng>(
        &self,
        v: &S,
        inclusion_probability: f64,
        coin: &mut CoinFlipper<R>,
    ) -> Result<HashSet<S>> {
        let mut sample = HashSet::new();
        for neighbor in v.neighbors() {
            if coin.trial_succeeds(inclusion_probability)? {
                sample.insert(neighbor);
            }
        }
        Ok(sample)
    }

    /// Empties both caches. Disabled caches are untouched.
    pub fn clear_caches(&mut self) {
        if let Some(cache) = self.edge_cache.as_mut() {
            cache.clear();
        }
        if let Some(cache) = self.neighborhood_cache.as_mut() {
            cache.clear();
        }
    }

    /// Returns `(hits, misses)` of the edge cache, or `None` when disabled.
    pub fn edge_cache_stats(&self) -> Option<(usize, usize)> {
        self.edge_cache.as_ref().map(|c| (c.hits(), c.misses()))
    }

    /// Returns `(hits, misses)` of the neighborhood cache, or `None` when
    /// disabled.
    pub fn neighborhood_cache_stats(&self) -> Option<(usize, usize)> {
        self.neighborhood_cache.as_ref().map(|c| (c.hits(), c.misses()))
    }
}
