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

//! # Matroid Constraint Core
//!
//! Constraint abstractions for combinatorial optimization. A matroid here
//! is a feasibility predicate over subsets of a finite ground set of
//! integer-labeled elements: the family of independent sets is closed under
//! subset-taking and satisfies the exchange property.
//!
//! The [`matroid::Matroid`] trait is the contract every constraint variant
//! implements; [`uniform::UniformMatroid`] is the cardinality constraint
//! `|S| <= k`. Optimizers hold a matroid value, probe candidate moves
//! through the pure queries (`can_insert`, `can_swap`, `swap_candidates`),
//! and commit them through the mutators (`insert`, `remove`).

use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, Display};
use std::hash::Hash;

pub mod err;
pub mod matroid;
pub mod uniform;

/// Bound alias for ground-set element types.
///
/// Elements are opaque unsigned integer labels; the matroid attaches no
/// payload or meaning to them beyond identity and ordering. `u64` is the
/// usual instantiation.
pub trait MatroidElement:
    PrimInt + Unsigned + Hash + Debug + Display + Send + Sync + 'static
{
}
impl<T> MatroidElement for T where
    T: PrimInt + Unsigned + Hash + Debug + Display + Send + Sync + 'static
{
}
