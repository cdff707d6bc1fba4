// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundVec;

impl<T> BoundVec<'_, T> {
    /// Views the live range as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all slots in `storage[..self.len]` are
        // initialized, and `self.len <= capacity`, so this creates a valid
        // shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.storage.as_ptr().cast::<T>(), self.len) }
    }

    /// Views the live range as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all slots in `storage[..self.len]` are
        // initialized, and `self.len <= capacity`. We have exclusive access
        // via `&mut self`, so a mutable slice over the live range is sound.
        unsafe { core::slice::from_raw_parts_mut(self.storage.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns a raw pointer to the start of the bound block.
    ///
    /// Only the first `len` slots are logically initialized as `T`; reading
    /// `ptr.add(i)` for `i >= len` is undefined behavior.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the bound block.
    ///
    /// Only the first `len` slots are logically initialized as `T`. Writes
    /// past `len` are allowed but do not change the logical length and are
    /// not reflected in the container's contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr().cast::<T>()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::BoundVec;
    use core::mem::MaybeUninit;

    #[test]
    fn test_as_ptr_and_as_mut_ptr() {
        let mut block = [const { MaybeUninit::<u16>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[10, 20]).unwrap();

        let p_const = v.as_ptr();
        let p_slice = v.as_slice().as_ptr();
        assert_eq!(p_const, p_slice);

        let p_mut = v.as_mut_ptr();
        let p_mut_slice = v.as_mut_slice().as_mut_ptr();
        assert_eq!(p_mut, p_mut_slice);

        {
            let s = v.as_mut_slice();
            s[1] = 21;
        }
        assert_eq!(v.as_slice(), &[10, 21]);
    }

    #[test]
    fn test_empty_slice_views() {
        let mut block = [const { MaybeUninit::<u16>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        assert_eq!(v.as_slice(), &[] as &[u16]);
        assert_eq!(v.as_mut_slice(), &mut [] as &mut [u16]);
    }
}
