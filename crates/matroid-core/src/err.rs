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

use crate::MatroidElement;
use std::fmt::Display;

/// Error returned by a checked [`crate::matroid::Matroid::insert`].
///
/// Insertion is the only fallible operation in the contract, and it fails
/// only on precondition violation: callers are expected to gate every
/// insert behind `can_insert`, so hitting either variant indicates a bug
/// in the driving algorithm rather than a recoverable runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertError<E: MatroidElement> {
    /// The element is already a member of the current set.
    Duplicate(E),
    /// Adding the element would violate the matroid constraint.
    Infeasible(E),
}

impl<E: MatroidElement> InsertError<E> {
    /// The element whose insertion was rejected.
    #[inline]
    pub fn element(&self) -> E {
        match self {
            InsertError::Duplicate(e) => *e,
            InsertError::Infeasible(e) => *e,
        }
    }
}

impl<E: MatroidElement> Display for InsertError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertError::Duplicate(e) => {
                write!(f, "Element {} is already in the current set", e)
            }
            InsertError::Infeasible(e) => {
                write!(f, "Inserting element {} would violate the constraint", e)
            }
        }
    }
}

impl<E: MatroidElement> std::error::Error for InsertError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_accessor_returns_rejected_element() {
        assert_eq!(InsertError::Duplicate(7u64).element(), 7);
        assert_eq!(InsertError::Infeasible(9u64).element(), 9);
    }

    #[test]
    fn test_display_duplicate() {
        let e: InsertError<u64> = InsertError::Duplicate(5);
        assert_eq!(format!("{}", e), "Element 5 is already in the current set");
    }

    #[test]
    fn test_display_infeasible() {
        let e: InsertError<u64> = InsertError::Infeasible(3);
        assert_eq!(
            format!("{}", e),
            "Inserting element 3 would violate the constraint"
        );
    }
}
