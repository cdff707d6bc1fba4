// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundVec};

// Core imports
use core::ptr;

impl<T> BoundVec<'_, T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the
    /// right. `index == len` degenerates to a plain append.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// On `Err`, the container is unchanged and `value` is dropped.
    ///
    /// The element is fully built before any live slot is touched, and the
    /// shift is a bitwise move, so no user code runs mid-shift and the live
    /// range can never be left in a torn state.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if self.len == self.capacity() {
            return Err(Error::Full);
        }
        let len = self.len;

        let p = self.storage.as_mut_ptr().cast::<T>();
        unsafe {
            // SAFETY: `index <= len < capacity`, so both the shift target
            // range `[index+1, len+1)` and the write at `index` stay inside
            // the bound block. `ptr::copy` handles the overlap.
            ptr::copy(p.add(index), p.add(index + 1), len - index);
            p.add(index).write(value);
        }

        self.len = len + 1;
        Ok(())
    }
}
