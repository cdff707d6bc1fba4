// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundVec};

impl<T> BoundVec<'_, T> {
    /// Replaces the contents with `n` clones of `value`.
    ///
    /// All-or-nothing: if `n` exceeds the capacity, [`Error::Full`] is
    /// returned and the current contents are untouched. On success the
    /// previous elements are destroyed first.
    pub fn assign_fill(&mut self, n: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if n > self.capacity() {
            return Err(Error::Full);
        }
        self.clear();
        self.append_fill(n, value)
    }

    /// Replaces the contents with clones of the elements of `src`.
    ///
    /// All-or-nothing: if `src` exceeds the capacity, [`Error::Full`] is
    /// returned and the current contents are untouched. On success the
    /// previous elements are destroyed first.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.capacity() {
            return Err(Error::Full);
        }
        self.clear();
        self.extend_from_slice(src)
    }
}
