// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The uniform (cardinality) matroid: all subsets of size at most `k`.

use crate::{MatroidElement, err::InsertError, matroid::Matroid};
use std::collections::BTreeSet;
use tracing::trace;

/// The cardinality constraint `|S| <= rank`.
///
/// State is the current set plus the fixed rank; there are no internal
/// algorithms beyond direct set operations. Membership, insertion and
/// deletion are `O(log n)` in the size of the current set, snapshots and
/// swap enumeration are `O(n)`.
///
/// # Examples
///
/// ```
/// use matroid_core::matroid::Matroid;
/// use matroid_core::uniform::UniformMatroid;
///
/// let mut m: UniformMatroid<u64> = UniformMatroid::new(2);
/// m.insert(3).unwrap();
/// m.insert(1).unwrap();
/// assert_eq!(m.current(), vec![1, 3]);
/// assert!(!m.can_insert(9));
/// m.remove(3);
/// assert!(m.can_insert(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformMatroid<E: MatroidElement> {
    current: BTreeSet<E>,
    rank: usize,
}

impl<E: MatroidElement> UniformMatroid<E> {
    /// Creates a uniform matroid of the given rank with an empty current
    /// set.
    #[inline]
    pub fn new(rank: usize) -> Self {
        Self {
            current: BTreeSet::new(),
            rank,
        }
    }

    /// The cardinality bound `k`, fixed at construction.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of elements in the current set.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns whether the current set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

impl<E: MatroidElement> Matroid<E> for UniformMatroid<E> {
    fn reset(&mut self) {
        trace!(dropped = self.current.len(), "reset uniform matroid");
        self.current.clear();
    }

    #[inline]
    fn can_insert(&self, element: E) -> bool {
        self.current.len() < self.rank && !self.current.contains(&element)
    }

    #[inline]
    fn can_swap(&self, entering: E, leaving: E) -> bool {
        // An exchange never changes the set size, so the only infeasible
        // case is `entering` colliding with a distinct current member.
        entering == leaving || !self.current.contains(&entering)
    }

    fn swap_candidates(&self, entering: E) -> Vec<E> {
        if self.current.contains(&entering) {
            return Vec::new();
        }
        // Any current member is a valid exchange partner: removing one and
        // inserting `entering` stays within the bound.
        self.current.iter().copied().collect()
    }

    fn insert(&mut self, element: E) -> Result<(), InsertError<E>> {
        if self.current.contains(&element) {
            return Err(InsertError::Duplicate(element));
        }
        if self.current.len() >= self.rank {
            return Err(InsertError::Infeasible(element));
        }
        self.current.insert(element);
        trace!(%element, len = self.current.len(), rank = self.rank, "inserted element");
        Ok(())
    }

    fn remove(&mut self, element: E) {
        if self.current.remove(&element) {
            trace!(%element, len = self.current.len(), "removed element");
        }
    }

    fn is_feasible(&self, elements: &[E]) -> bool {
        let distinct: BTreeSet<E> = elements.iter().copied().collect();
        distinct.len() <= self.rank
    }

    #[inline]
    fn current_is_feasible(&self) -> bool {
        self.current.len() <= self.rank
    }

    fn current(&self) -> Vec<E> {
        self.current.iter().copied().collect()
    }

    #[inline]
    fn contains(&self, element: E) -> bool {
        self.current.contains(&element)
    }

    fn clone_matroid(&self) -> Box<dyn Matroid<E>> {
        Box::new(self.clone())
    }
}
