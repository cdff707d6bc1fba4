// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundVec;

impl<T> BoundVec<'_, T> {
    /// Removes and returns the last live element, or `None` if empty.
    ///
    /// The element's lifetime moves to the caller; its slot becomes raw.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all slots in `storage[..old_len]`
            // are initialized by invariant, so `storage[self.len]` (the old
            // last slot) holds a valid `T`. Reading it out leaves the slot
            // raw, matching the retracted `len`.
            let out = unsafe { self.storage[self.len].assume_init_read() };
            Some(out)
        }
    }
}
