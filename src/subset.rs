//! Dense integer-subset tracking for candidate indices.
//!
//! This module provides an efficient way to track a subset of
//! `{0, 1, ..., n-1}` for a fixed maximum value `n`. It is backed by two
//! parallel arrays instead of a hashed structure, so membership, insertion,
//! and removal are each a constant number of array accesses.

use crate::error::{Error, Result};

/// Sentinel slot value marking an element as absent.
const ABSENT: usize = usize::MAX;

/// A dynamic subset of `[0, n)` with O(1) insert, remove, and membership.
///
/// The packed `dense` list holds exactly the live elements; `slots[e]`
/// records the position of `e` inside it, or [`ABSENT`] when `e` is not a
/// member. Removal relocates the last live element into the vacated slot
/// ("swap-remove"), which keeps every operation O(1) at the expense of
/// losing insertion order among the remaining elements.
#[derive(Debug, Clone)]
pub struct Subset {
    /// Position of each element in `dense`, or `ABSENT`.
    slots: Vec<usize>,
    /// Packed list of the live elements.
    dense: Vec<usize>,
}

impl Subset {
    /// Creates an empty subset of `[0, n)`.
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![ABSENT; n],
            dense: Vec::new(),
        }
    }

    /// Returns the fixed capacity `n` chosen at creation.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns true if no element is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    #[inline]
    fn check(&self, element: usize) -> Result<()> {
        if element >= self.slots.len() {
            return Err(Error::OutOfRange {
                element,
                capacity: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Returns true if `element` is present.
    ///
    /// Fails with [`Error::OutOfRange`] when `element` lies outside `[0, n)`.
    #[inline]
    pub fn contains(&self, element: usize) -> Result<bool> {
        self.check(element)?;
        Ok(self.slots[element] != ABSENT)
    }

    /// Inserts `element` into the subset.
    ///
    /// Returns true if the element was not previously present.
    pub fn insert(&mut self, element: usize) -> Result<bool> {
        if self.contains(element)? {
            return Ok(false);
        }
        self.slots[element] = self.dense.len();
        self.dense.push(element);
        Ok(true)
    }

    /// Removes `element` from the subset.
    ///
    /// Returns true if the element was present. The last live element is
    /// swapped into the vacated slot of the dense list.
    pub fn remove(&mut self, element: usize) -> Result<bool> {
        if !self.contains(element)? {
            return Ok(false);
        }
        let slot = self.slots[element];
        self.slots[element] = ABSENT;
        if let Some(last) = self.dense.pop() {
            if last != element {
                self.dense[slot] = last;
                self.slots[last] = slot;
            }
        }
        Ok(true)
    }

    /// Inserts `to_add` and, only if that actually changed the subset,
    /// removes `to_remove`. Returns the short-circuited logical AND of the
    /// two steps.
    ///
    /// This is **not** an atomic replace: when `to_add` is already present
    /// the removal is never attempted, `to_remove` stays in the subset, and
    /// the call returns false. Callers that need a true replacement must
    /// check the result.
    pub fn swap(&mut self, to_add: usize, to_remove: usize) -> Result<bool> {
        Ok(self.insert(to_add)? && self.remove(to_remove)?)
    }

    /// Marks every element absent. This is O(n).
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = ABSENT;
        }
        self.dense.clear();
    }

    /// Replaces the contents with the given elements.
    ///
    /// The subset is cleared first; the first out-of-range element aborts
    /// the assignment with [`Error::OutOfRange`].
    pub fn assign<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        self.clear();
        for element in elements {
            self.insert(element)?;
        }
        Ok(())
    }

    /// Iterates over the live elements.
    ///
    /// Each live element is yielded exactly once; the order is the dense
    /// list order, which is not insertion order after removals.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().copied()
    }
}
