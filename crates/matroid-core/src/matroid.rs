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

//! The abstract matroid contract.
//!
//! Every constraint variant implements [`Matroid`]. A value carries a
//! mutable current set (the selection built so far) together with its
//! immutable constraint parameters, and guarantees the class invariant
//! that the current set stays feasible as long as callers only commit
//! moves the pure queries have certified.

use crate::{MatroidElement, err::InsertError};
use std::fmt::Debug;

/// Feasibility constraint over subsets of a ground set of elements.
///
/// The trait is a capability set, not a base class: each implementation
/// owns its constraint parameters and its current set outright, and no
/// mutable state is shared between values. Concurrent branches of a
/// search take independent copies via [`Matroid::clone_matroid`] (or
/// `Clone` on the concrete type) instead of relying on internal locking.
///
/// # Examples
///
/// ```
/// use matroid_core::matroid::Matroid;
/// use matroid_core::uniform::UniformMatroid;
///
/// let mut m: UniformMatroid<u64> = UniformMatroid::new(2);
/// assert!(m.can_insert(5));
/// m.insert(5).unwrap();
/// m.insert(7).unwrap();
/// assert!(!m.can_insert(9)); // at capacity
/// assert_eq!(m.swap_candidates(9), vec![5, 7]);
/// ```
pub trait Matroid<E: MatroidElement>: Debug + Send {
    /// Clears the current set back to empty.
    ///
    /// The empty set is independent in every matroid, so this always
    /// re-establishes the feasibility invariant regardless of prior state.
    fn reset(&mut self);

    /// Returns whether inserting `element` would keep the current set
    /// feasible. Pure query; never mutates.
    fn can_insert(&self, element: E) -> bool;

    /// Returns whether removing `leaving` and inserting `entering` would
    /// keep the current set feasible.
    ///
    /// Defined permissively when `leaving` is not a current member; an
    /// exchange is size-preserving, so for cardinality-style constraints
    /// this reduces to `entering` not colliding with a distinct current
    /// member.
    fn can_swap(&self, entering: E, leaving: E) -> bool;

    /// Returns every current member that could legally be replaced by
    /// `entering`, in ascending element order.
    ///
    /// An empty result is valid, e.g. when `entering` is already a member.
    fn swap_candidates(&self, entering: E) -> Vec<E>;

    /// Inserts `element` into the current set.
    ///
    /// Precondition: [`Matroid::can_insert`] holds for `element`. This is
    /// the checked variant of the contract: a violated precondition is
    /// reported through [`InsertError`] instead of corrupting the
    /// feasibility invariant.
    fn insert(&mut self, element: E) -> Result<(), InsertError<E>>;

    /// Removes `element` from the current set. Removing an absent element
    /// is a no-op, not an error.
    fn remove(&mut self, element: E);

    /// Returns whether the given collection would satisfy the constraint
    /// on its own, independent of the current set. Duplicates in the
    /// slice collapse to a single element.
    fn is_feasible(&self, elements: &[E]) -> bool;

    /// Returns whether the current set satisfies the constraint.
    ///
    /// Always true as a class invariant; exposed for defensive checks by
    /// callers.
    fn current_is_feasible(&self) -> bool {
        self.is_feasible(&self.current())
    }

    /// Returns a snapshot of the current set in ascending element order.
    /// The snapshot does not track later mutations.
    fn current(&self) -> Vec<E>;

    /// Returns whether `element` is a member of the current set.
    fn contains(&self, element: E) -> bool;

    /// Returns a deep, independent copy of this matroid behind the trait
    /// object: same constraint parameters, same current set, no shared
    /// mutable state with the original.
    fn clone_matroid(&self) -> Box<dyn Matroid<E>>;
}

impl<E: MatroidElement> Clone for Box<dyn Matroid<E>> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_matroid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform::UniformMatroid;
    use std::collections::BTreeSet;

    /// Test-only variant with no constraint at all: every subset of the
    /// ground set is independent. Exercises the provided
    /// `current_is_feasible` default.
    #[derive(Debug, Clone, Default)]
    struct FreeMatroid {
        current: BTreeSet<u64>,
    }

    impl Matroid<u64> for FreeMatroid {
        fn reset(&mut self) {
            self.current.clear();
        }

        fn can_insert(&self, element: u64) -> bool {
            !self.current.contains(&element)
        }

        fn can_swap(&self, entering: u64, leaving: u64) -> bool {
            entering == leaving || !self.current.contains(&entering)
        }

        fn swap_candidates(&self, entering: u64) -> Vec<u64> {
            if self.current.contains(&entering) {
                Vec::new()
            } else {
                self.current.iter().copied().collect()
            }
        }

        fn insert(&mut self, element: u64) -> Result<(), InsertError<u64>> {
            if !self.current.insert(element) {
                return Err(InsertError::Duplicate(element));
            }
            Ok(())
        }

        fn remove(&mut self, element: u64) {
            self.current.remove(&element);
        }

        fn is_feasible(&self, _elements: &[u64]) -> bool {
            true
        }

        fn current(&self) -> Vec<u64> {
            self.current.iter().copied().collect()
        }

        fn contains(&self, element: u64) -> bool {
            self.current.contains(&element)
        }

        fn clone_matroid(&self) -> Box<dyn Matroid<u64>> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_default_current_is_feasible_uses_is_feasible() {
        let mut m = FreeMatroid::default();
        assert!(m.current_is_feasible());
        m.insert(1).unwrap();
        m.insert(2).unwrap();
        assert!(m.current_is_feasible());
    }

    #[test]
    fn test_boxed_matroid_is_usable_through_the_contract() {
        let mut boxed: Box<dyn Matroid<u64>> = Box::new(UniformMatroid::<u64>::new(2));
        assert!(boxed.can_insert(4));
        boxed.insert(4).unwrap();
        boxed.insert(8).unwrap();
        assert!(!boxed.can_insert(15));
        assert_eq!(boxed.current(), vec![4, 8]);
    }

    #[test]
    fn test_boxed_clone_is_independent_of_original() {
        let mut original: Box<dyn Matroid<u64>> = Box::new(UniformMatroid::<u64>::new(3));
        original.insert(1).unwrap();
        original.insert(2).unwrap();

        let mut copy = original.clone();
        assert_eq!(copy.current(), original.current());

        copy.insert(3).unwrap();
        original.remove(1);
        assert_eq!(original.current(), vec![2]);
        assert_eq!(copy.current(), vec![1, 2, 3]);
    }

    #[test]
    fn test_variants_are_interchangeable_behind_the_trait() {
        let mut matroids: Vec<Box<dyn Matroid<u64>>> = vec![
            Box::new(UniformMatroid::<u64>::new(1)),
            Box::new(FreeMatroid::default()),
        ];
        for m in &mut matroids {
            assert!(m.can_insert(42));
            m.insert(42).unwrap();
            assert!(m.contains(42));
            assert!(m.current_is_feasible());
        }
        // The uniform variant is saturated at rank 1, the free one is not.
        assert!(!matroids[0].can_insert(43));
        assert!(matroids[1].can_insert(43));
    }
}
