// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundVec;

// Core imports
use core::mem::MaybeUninit;

impl<'a, T> BoundVec<'a, T> {
    /// Binds an empty container to `storage`.
    ///
    /// The block's length becomes the capacity; the initial logical length
    /// is `0`. The container never touches memory outside `storage`.
    #[inline]
    pub fn new(storage: &'a mut [MaybeUninit<T>]) -> Self {
        Self { storage, len: 0 }
    }

    /// Binds a well-aligned container to a slab of raw bytes.
    ///
    /// The typed block is as large as the byte slab's size and alignment
    /// allow; misaligned leading and trailing bytes are discarded. Use
    /// [`align_from_uninit_bytes`](Self::align_from_uninit_bytes) to keep
    /// them.
    ///
    /// ```rust
    /// use bound_vec::BoundVec;
    /// use core::mem::MaybeUninit;
    ///
    /// let mut slab = [const { MaybeUninit::<u8>::uninit() }; 64];
    /// let v: BoundVec<u32> = BoundVec::from_uninit_bytes(&mut slab);
    /// assert!(v.is_empty());
    /// assert!(v.capacity() <= 16);
    /// ```
    #[inline]
    pub fn from_uninit_bytes(bytes: &'a mut [MaybeUninit<u8>]) -> Self {
        let (_prefix, vec, _suffix) = Self::align_from_uninit_bytes(bytes);
        vec
    }

    /// Binds a well-aligned container to a slab of raw bytes, returning the
    /// unused prefix and suffix byte ranges on either side of the carved-out
    /// block.
    pub fn align_from_uninit_bytes(
        bytes: &'a mut [MaybeUninit<u8>],
    ) -> (
        &'a mut [MaybeUninit<u8>],
        Self,
        &'a mut [MaybeUninit<u8>],
    ) {
        // SAFETY: `MaybeUninit<T>` has no validity requirements, so any
        // reinterpretation of (possibly uninitialized) bytes as
        // `MaybeUninit<T>` slots is sound. `align_to_mut` guarantees the
        // middle slice is correctly aligned for `T`.
        let (prefix, storage, suffix) = unsafe { bytes.align_to_mut::<MaybeUninit<T>>() };
        (prefix, Self { storage, len: 0 }, suffix)
    }

    /// Sets the logical length to `new_len` without constructing or
    /// destroying anything.
    ///
    /// This is the bind-time escape hatch for callers that initialize slots
    /// externally, typically through
    /// [`spare_capacity_mut`](Self::spare_capacity_mut).
    ///
    /// # Safety
    ///
    /// - `new_len <= capacity()`.
    /// - `storage[..new_len]` must hold initialized `T` values.
    ///
    /// Shrinking the length this way does not run destructors; the skipped
    /// elements leak.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Returns the raw tail of the block: the slots past the live range.
    ///
    /// Writing into the returned slice does not change the logical length;
    /// pair with [`set_len`](Self::set_len) after initializing a prefix of
    /// it.
    ///
    /// # Safety
    ///
    /// The returned slots may only be filled with initialized `T` values.
    /// They must not be de-initialized (for example by storing
    /// `MaybeUninit::uninit()`): when the container was bound over a
    /// caller's initialized slice (`From<&'a mut [T]>`), the tail slots
    /// alias memory the caller will read as `T` again once the borrow ends.
    #[inline]
    pub unsafe fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let len = self.len;
        &mut self.storage[len..]
    }
}

impl<'a, T> From<&'a mut [MaybeUninit<T>]> for BoundVec<'a, T> {
    #[inline]
    fn from(storage: &'a mut [MaybeUninit<T>]) -> Self {
        Self::new(storage)
    }
}

/// Binds a fully initialized block: every slot is live (`len == capacity`).
///
/// Restricted to `Copy` elements so that the container's drop cannot end
/// lifetimes the caller's array still claims. The caller reads the slice as
/// `[T]` again after the borrow ends; every safe operation only ever stores
/// initialized values into the block, so that read stays valid. The one API
/// that could break this is [`spare_capacity_mut`](BoundVec::spare_capacity_mut),
/// which is `unsafe` for exactly that reason.
impl<'a, T: Copy> From<&'a mut [T]> for BoundVec<'a, T> {
    #[inline]
    fn from(live: &'a mut [T]) -> Self {
        let len = live.len();
        // SAFETY: `MaybeUninit<T>` is layout-compatible with `T`, and every
        // element of `live` is initialized, matching `len` live slots.
        let storage = unsafe {
            core::slice::from_raw_parts_mut(live.as_mut_ptr().cast::<MaybeUninit<T>>(), len)
        };
        Self { storage, len }
    }
}
