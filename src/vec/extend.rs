// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundVec};

// Core imports
use core::ptr;

/// Saturating append from an iterator of unknown length.
///
/// Elements are taken from the source one at a time until it is exhausted or
/// the container is full; the remainder of the source is left unconsumed.
impl<T> Extend<T> for BoundVec<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let spare = self.spare_capacity();
        if spare == 0 {
            return;
        }
        for item in iter.into_iter().take(spare) {
            self.storage[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<T> BoundVec<'_, T> {
    /// Appends clones of every element of `src` if they all fit; otherwise
    /// no-op and returns [`Error::Full`].
    ///
    /// Known-length bulk append: the capacity check happens once, before any
    /// element is constructed (all-or-nothing).
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        for item in src {
            self.storage[self.len].write(item.clone());
            // Advance per element so a panicking clone leaves a consistent
            // live range behind.
            self.len += 1;
        }
        Ok(())
    }

    /// Clones as many elements from `src` as will fit and returns the count
    /// appended.
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = self.spare_capacity().min(src.len());
        for item in &src[..take] {
            self.storage[self.len].write(item.clone());
            self.len += 1;
        }
        take
    }

    /// Appends `n` clones of `value` if they fit; otherwise no-op and
    /// returns [`Error::Full`].
    pub fn append_fill(&mut self, n: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if n > self.spare_capacity() {
            return Err(Error::Full);
        }
        if n == 0 {
            return Ok(());
        }
        for _ in 0..n - 1 {
            self.storage[self.len].write(value.clone());
            self.len += 1;
        }
        // The last slot takes `value` itself.
        self.storage[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Appends every element of an iterator of unknown length,
    /// all-or-nothing.
    ///
    /// Elements are staged into the raw tail of the block without advancing
    /// the live cursor. If the source yields more than
    /// [`spare_capacity`](Self::spare_capacity) elements, the staged ones
    /// are destroyed, [`Error::Full`] is returned, and the container reads
    /// exactly as it did before the call. The source iterator may be left
    /// partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<(), Error> {
        let len = self.len;
        let spare = self.spare_capacity();
        let mut staged = 0;

        for item in iter {
            if staged == spare {
                let p = self.storage.as_mut_ptr().cast::<T>();
                unsafe {
                    // SAFETY: exactly `staged` elements were written into
                    // `storage[len..len + staged]` and never became part of
                    // the live range; destroying them here returns those
                    // slots to raw.
                    ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p.add(len), staged));
                }
                return Err(Error::Full);
            }
            self.storage[len + staged].write(item);
            staged += 1;
        }

        self.len = len + staged;
        Ok(())
    }
}
