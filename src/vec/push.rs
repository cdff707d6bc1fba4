// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundVec};

impl<T> BoundVec<'_, T> {
    /// Appends `value` if not full; returns [`Error::Full`] otherwise.
    ///
    /// On `Err`, the container is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            return Err(Error::Full);
        }
        self.storage[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Appends `value`, handing it back if there is no room.
    ///
    /// Unlike [`push`](Self::push), a rejected element is returned to the
    /// caller instead of being dropped, so non-`Copy` values survive a full
    /// container.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.len == self.capacity() {
            return Err(value);
        }
        self.storage[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Appends `value` without checking capacity.
    ///
    /// This is the zero-overhead fast path for hot loops where capacity was
    /// proven once up front:
    ///
    /// ```rust
    /// use bound_vec::BoundVec;
    /// use core::mem::MaybeUninit;
    ///
    /// let mut block = [const { MaybeUninit::<usize>::uninit() }; 16];
    /// let mut v = BoundVec::new(&mut block);
    /// for i in 0..v.capacity() {
    ///     // SAFETY: the loop runs exactly `capacity` times on an empty vec.
    ///     unsafe { v.push_unchecked(i) };
    /// }
    /// assert!(v.is_full());
    /// ```
    ///
    /// # Safety
    ///
    /// `self.len() < self.capacity()` must hold. Violating this writes past
    /// the live range bookkeeping and is undefined behavior.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        let len = self.len;
        // SAFETY: The caller guarantees `len < capacity`, so the slot exists
        // and is raw.
        unsafe { self.storage.get_unchecked_mut(len) }.write(value);
        self.len = len + 1;
    }
}
