// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundVec;

impl<T> BoundVec<'_, T> {
    /// Keeps only the elements for which `f` returns `true`, preserving
    /// their relative order. Rejected elements are destroyed in place.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        // Zero the live range up front: if `f` or a drop panics mid-pass,
        // elements still sitting in the block leak instead of being
        // destroyed twice by the container's own drop.
        self.len = 0;

        let mut write = 0;
        for read in 0..len {
            // SAFETY: `read < len` and every slot in the original live range
            // is initialized; each slot is read out exactly once.
            let item = unsafe { self.storage[read].assume_init_read() };
            if f(&item) {
                // `write <= read`, so the target slot has already been read
                // out (or is the same slot) and can be overwritten.
                self.storage[write].write(item);
                write += 1;
            }
        }

        self.len = write;
    }
}
