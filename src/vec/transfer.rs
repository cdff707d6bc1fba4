// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundVec};

// Core imports
use core::ptr;

impl<T> BoundVec<'_, T> {
    /// Clones `src` into the live prefix, reusing live slots where both
    /// sides have them and constructing only into the raw tail.
    ///
    /// Capacity must have been checked by the caller.
    fn clone_prefix_from(&mut self, src: &[T])
    where
        T: Clone,
    {
        let n = src.len();
        if self.len >= n {
            // Clone over existing elements, then destroy the excess.
            self.as_mut_slice()[..n].clone_from_slice(&src[..n]);
            self.truncate(n);
        } else {
            let live = self.len;
            self.as_mut_slice().clone_from_slice(&src[..live]);
            for item in &src[live..] {
                self.storage[self.len].write(item.clone());
                self.len += 1;
            }
        }
    }

    /// Clones the contents of `source` into `self`, replacing whatever was
    /// here.
    ///
    /// Returns [`Error::Full`] without modifying `self` when `source` holds
    /// more elements than this container's capacity. The two containers keep
    /// their own storage blocks; only element values travel.
    pub fn try_clone_from(&mut self, source: &BoundVec<'_, T>) -> Result<(), Error>
    where
        T: Clone,
    {
        if source.len() > self.capacity() {
            return Err(Error::Full);
        }
        self.clone_prefix_from(source.as_slice());
        Ok(())
    }

    /// Clones as much of `source` as fits and returns the resulting length.
    pub fn clone_from_truncated(&mut self, source: &BoundVec<'_, T>) -> usize
    where
        T: Clone,
    {
        let n = source.len().min(self.capacity());
        self.clone_prefix_from(&source.as_slice()[..n]);
        n
    }

    /// Moves the contents of `source` into `self`, leaving `source` empty.
    ///
    /// Returns [`Error::Full`] without modifying either container when
    /// `source` holds more elements than this container's capacity. The
    /// storage blocks themselves do not change hands; elements are relocated
    /// bitwise from one block to the other.
    pub fn try_move_from(&mut self, source: &mut BoundVec<'_, T>) -> Result<(), Error> {
        let n = source.len();
        if n > self.capacity() {
            return Err(Error::Full);
        }
        self.clear();
        unsafe {
            // SAFETY: `source.storage[..n]` is initialized by invariant and
            // `n <= self.capacity()`, so the destination range is in bounds.
            // The blocks are distinct borrows, so the ranges cannot overlap.
            ptr::copy_nonoverlapping(
                source.storage.as_ptr().cast::<T>(),
                self.storage.as_mut_ptr().cast::<T>(),
                n,
            );
        }
        // Ownership of the `n` elements moved with the bits.
        source.len = 0;
        self.len = n;
        Ok(())
    }
}
