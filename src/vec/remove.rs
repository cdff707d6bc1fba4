// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundVec;

// Core imports
use core::ptr;

impl<T> BoundVec<'_, T> {
    /// Removes and returns the element at `index`, shifting subsequent
    /// elements one slot left in ascending order.
    ///
    /// Returns `None` if `index >= len`. The element that followed the
    /// removed one (if any) now lives at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;

        let p = self.storage.as_mut_ptr().cast::<T>();
        let out = unsafe {
            // SAFETY: `index < len`, so the slot is within the live prefix
            // and holds a valid `T`. Reading it out makes the slot a hole
            // that the shift below immediately fills.
            let out = p.add(index).read();
            // Shift left: [index+1, len) -> [index, len-1).
            ptr::copy(p.add(index + 1), p.add(index), len - index - 1);
            out
        };

        self.len = len - 1;
        Some(out)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into the hole.
    ///
    /// O(1), but does not preserve ordering. Returns `None` when
    /// `index >= len`. Removing the last element avoids the move.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;

        let p = self.storage.as_mut_ptr().cast::<T>();
        let out = unsafe {
            // SAFETY: Before the decrement `index < old_len`, so both
            // `storage[index]` and `storage[last]` were within the live
            // prefix. The read at `index` leaves a hole; if it was not the
            // last slot, the last element relocates into it, leaving only
            // the retired slot raw.
            let out = p.add(index).read();
            if index != last {
                p.add(index).write(p.add(last).read());
            }
            out
        };

        Some(out)
    }
}
