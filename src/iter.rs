// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundVec`](crate::BoundVec).
//!
//! - `IntoIter<'a, T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&BoundVec` and `&mut BoundVec` iterate as slices.

// Crate imports
use crate::vec::BoundVec;

// Core imports
use core::iter::FusedIterator;
use core::ptr;

/// Owned iterator returned by `BoundVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded by the time
/// the iterator is dropped are destroyed; the storage block itself unbinds
/// when the iterator goes away.
pub struct IntoIter<'a, T> {
    // `v.len` is zeroed on construction; `[front, back)` tracks which slots
    // still hold live elements.
    v: BoundVec<'a, T>,
    front: usize,
    back: usize, // exclusive
}

// Default `nth`/`nth_back` route through `next`/`next_back`, which reads
// every skipped element out and drops it. Skipping bitwise would leak, so
// the defaults are deliberately not overridden.
impl<T> Iterator for IntoIter<'_, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` is within `[front, back)`, the range of slots that
            // were live at construction and have not been yielded yet.
            Some(unsafe { self.v.storage[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` moved down onto a not-yet-yielded live slot.
            Some(unsafe { self.v.storage[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<'_, T> {}

impl<T> Drop for IntoIter<'_, T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        if remaining == 0 {
            return;
        }
        let p = self.v.storage.as_mut_ptr().cast::<T>();
        unsafe {
            // SAFETY: `[front, back)` holds exactly the elements that were
            // never yielded; the inner vec's own drop sees `len == 0` and
            // touches nothing.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p.add(self.front), remaining));
        }
    }
}

impl<'a, 'v, T> IntoIterator for &'v BoundVec<'a, T> {
    type Item = &'v T;
    type IntoIter = core::slice::Iter<'v, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, 'v, T> IntoIterator for &'v mut BoundVec<'a, T> {
    type Item = &'v mut T;
    type IntoIter = core::slice::IterMut<'v, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<'a, T> IntoIterator for BoundVec<'a, T> {
    type Item = T;
    type IntoIter = IntoIter<'a, T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The iterator now owns the elements; the vec must not drop them.
        self.len = 0;
        IntoIter {
            v: self,
            front: 0,
            back,
        }
    }
}
