// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundVec` type and its inherent API.
//!
//! `BoundVec<'a, T>` is a fixed-capacity vector over a borrowed block of
//! possibly uninitialized slots. It tracks a logical length and keeps all
//! mutation inside the borrowed block. Methods generally mirror slice/vector
//! semantics, with explicit capacity checks and fallible variants where
//! appropriate.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= storage.len()` always holds.
// - Slots in `storage[..len]` are initialized `T` values.
// - Slots in `storage[len..]` are logically uninitialized and must never be
//   read as `T`.
// - Every element constructed in the block has its destructor run exactly
//   once: by a removal operation, by `clear`/`truncate`/assignment, or by the
//   container's own `Drop`.
// - All public methods maintain these invariants.

mod assign;
mod extend;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod retain;
mod slice;
mod transfer;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity vector inside a caller-supplied block of memory.
///
/// `BoundVec<'a, T>` borrows a contiguous block of slots
/// (`&'a mut [MaybeUninit<T>]`) and tracks a logical length
/// `len ∈ 0..=capacity`:
///
/// - the capacity is the length of the borrowed block, fixed once bound;
/// - only the prefix `storage[..len]` is initialized and visible through safe
///   APIs ([`as_slice`], [`as_mut_slice`], indexing, iteration);
/// - the block is never allocated, freed, resized, or relocated by the
///   container — it is strictly the caller's;
/// - the container owns the element *lifetimes*: dropping the `BoundVec`
///   drops every live element, the block stays behind as raw slots.
///
/// # Binding to a block
///
/// A `BoundVec` is created either unbound ([`Default`], zero capacity) or
/// bound to a block via [`new`](BoundVec::new), the `From` impls, or the
/// byte-slab constructors ([`from_uninit_bytes`](BoundVec::from_uninit_bytes),
/// [`align_from_uninit_bytes`](BoundVec::align_from_uninit_bytes)).
///
/// ```rust
/// use bound_vec::BoundVec;
/// use core::mem::MaybeUninit;
///
/// let mut block = [const { MaybeUninit::<u8>::uninit() }; 4];
/// let mut v = BoundVec::new(&mut block);
/// v.push(1).unwrap();
/// v.extend_from_slice(&[2, 3]).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// ```
///
/// # Fallible vs saturating operations
///
/// Capacity-sensitive operations come in two styles:
///
/// - **Fallible** (error on overflow, no changes on error):
///   [`push`](BoundVec::push), [`insert`](BoundVec::insert),
///   [`append_fill`](BoundVec::append_fill),
///   [`extend_from_slice`](BoundVec::extend_from_slice),
///   [`try_extend_from_iter`](BoundVec::try_extend_from_iter),
///   [`assign_fill`](BoundVec::assign_fill),
///   [`assign_from_slice`](BoundVec::assign_from_slice),
///   [`try_clone_from`](BoundVec::try_clone_from),
///   [`try_move_from`](BoundVec::try_move_from),
///   [`resize`](BoundVec::resize).
///
///   These return [`Error::Full`] when the operation would exceed capacity.
///   Bulk variants are all-or-nothing: on error, nothing was applied.
///
/// - **Saturating** (apply what fits, report the count):
///   [`extend_from_slice_truncated`](BoundVec::extend_from_slice_truncated),
///   [`clone_from_truncated`](BoundVec::clone_from_truncated), and
///   [`Extend<T>`](core::iter::Extend), which consumes the source iterator
///   only while there is room.
///
/// # Concurrency and aliasing
///
/// Single-threaded contract: no internal synchronization exists, every
/// operation is synchronous and bounded by the size of the range it touches.
/// Two containers must never view overlapping blocks; Rust's `&mut` borrow of
/// the storage enforces this statically.
pub struct BoundVec<'a, T> {
    pub(crate) storage: &'a mut [MaybeUninit<T>],
    pub(crate) len: usize,
}

impl<T> BoundVec<'_, T> {
    /// Returns the capacity: the slot count of the bound block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns `capacity - len`, the number of additional elements that can
    /// be pushed.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns the theoretical slot-count ceiling for element type `T`,
    /// independent of any bound block.
    ///
    /// No block longer than this can exist; for zero-sized `T` the ceiling is
    /// `usize::MAX`.
    #[inline]
    pub const fn max_capacity() -> usize {
        if core::mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / core::mem::size_of::<T>()
        }
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    ///
    /// Reverse iteration over the live range is `self.iter().rev()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first live element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last live element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first live element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last live element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}

impl<T> BoundVec<'_, T> {
    /// Destroys every live element and resets `len` to `0`.
    ///
    /// The capacity and the bound block are unaffected.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrinks to `new_len` if `new_len < len`, destroying the tail
    /// elements; otherwise a no-op.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Retract the cursor before running destructors: a panicking
        // destructor must not leave already-dropped slots inside the live
        // range.
        self.len = new_len;
        let p = self.storage.as_mut_ptr().cast::<T>();
        unsafe {
            // SAFETY: `storage[new_len..old_len]` was part of the live prefix
            // and holds initialized `T` values; after this call those slots
            // are raw again, matching `len == new_len`.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                p.add(new_len),
                old_len - new_len,
            ));
        }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > capacity`; the contents are
    /// unchanged in that case.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.capacity() {
            return Err(Error::Full);
        }
        self.append_fill(new_len - self.len, value)
    }

    /// Fallible variant of [`remove`](BoundVec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Fallible variant of [`swap_remove`](BoundVec::swap_remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }

    /// Returns `true` if the live range contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<'a, T> BoundVec<'a, T> {
    /// Exchanges the bound blocks of two containers in constant time.
    ///
    /// This swaps *which block each container is viewing* — capacities and
    /// live ranges travel with the blocks. No element is moved, constructed,
    /// or destroyed.
    ///
    /// ```rust
    /// use bound_vec::BoundVec;
    /// use core::mem::MaybeUninit;
    ///
    /// let mut block_a = [const { MaybeUninit::<u8>::uninit() }; 2];
    /// let mut block_b = [const { MaybeUninit::<u8>::uninit() }; 8];
    /// let mut a = BoundVec::new(&mut block_a);
    /// let mut b = BoundVec::new(&mut block_b);
    /// b.push(7).unwrap();
    ///
    /// a.swap_with(&mut b);
    /// assert_eq!(a.capacity(), 8);
    /// assert_eq!(a.as_slice(), &[7]);
    /// assert_eq!(b.capacity(), 2);
    /// assert!(b.is_empty());
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut BoundVec<'a, T>) {
        core::mem::swap(self, other);
    }
}

/// An unbound container: no block, zero capacity, zero length.
impl<T> Default for BoundVec<'_, T> {
    fn default() -> Self {
        Self {
            storage: &mut [],
            len: 0,
        }
    }
}

impl<T> Drop for BoundVec<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BoundVec<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for BoundVec<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for BoundVec<'_, T> {}
impl<T: Ord> Ord for BoundVec<'_, T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for BoundVec<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for BoundVec<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for BoundVec<'_, T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for BoundVec<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for BoundVec<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for BoundVec<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for BoundVec<'_, T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for BoundVec<'_, T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // Imports
    use super::BoundVec;
    use core::cell::Cell;
    use core::mem::MaybeUninit;

    /// Increments the shared counter when dropped.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Token<'c>(pub(crate) &'c Cell<usize>, pub(crate) u32);

    impl Drop for Token<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_push_pop() {
        let mut block = [const { MaybeUninit::<u8>::uninit() }; 2];
        let mut v = BoundVec::new(&mut block);
        v.push(1).unwrap();
        v.push(2).unwrap();
        assert!(v.push(9).is_err());
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_bind_and_capacity_accounting() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 4];
        let v = BoundVec::new(&mut block);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert!(v.is_empty());
        assert!(!v.is_full());
        assert_eq!(v.spare_capacity(), 4);
    }

    #[test]
    fn test_default_is_unbound() {
        let mut v: BoundVec<i32> = BoundVec::default();
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.is_full());
        assert_eq!(v.push(1), Err(crate::Error::Full));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_max_capacity_ceiling() {
        assert_eq!(BoundVec::<()>::max_capacity(), usize::MAX);
        assert_eq!(BoundVec::<u8>::max_capacity(), isize::MAX as usize);
        assert_eq!(BoundVec::<u32>::max_capacity(), isize::MAX as usize / 4);
        // The ceiling is a property of the element type, not of any block.
        let mut block = [const { MaybeUninit::<u32>::uninit() }; 3];
        let v = BoundVec::new(&mut block);
        assert!(v.capacity() <= BoundVec::<u32>::max_capacity());
    }

    #[test]
    fn test_capacity_fixed_across_operations() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 5];
        let mut v = BoundVec::new(&mut block);
        for op in 0..4 {
            match op {
                0 => {
                    let _ = v.push(1);
                }
                1 => v.extend([2, 3, 4, 5, 6, 7]),
                2 => {
                    v.pop();
                }
                _ => v.clear(),
            }
            assert!(v.len() <= v.capacity());
            assert_eq!(v.capacity(), 5);
        }
    }

    #[test]
    fn test_truncate_and_resize() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 5];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[1, 2, 3, 4]).unwrap();
        v.truncate(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        v.resize(5, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 9, 9, 9]);
        v.resize(3, 0).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 9]);

        let mut small = [const { MaybeUninit::<i32>::uninit() }; 3];
        let mut w = BoundVec::new(&mut small);
        assert_eq!(w.resize(4, 7), Err(crate::Error::Full));
        assert!(w.is_empty());
    }

    #[test]
    fn test_truncate_destroys_tail_exactly_once() {
        let drops = Cell::new(0);
        let mut block = [const { MaybeUninit::<Token>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        for i in 0..4 {
            v.push(Token(&drops, i)).unwrap();
        }
        v.truncate(1);
        assert_eq!(drops.get(), 3);
        v.truncate(3); // growing truncate is a no-op
        assert_eq!(v.len(), 1);
        assert_eq!(drops.get(), 3);
        drop(v);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_clear_destroys_all_and_keeps_capacity() {
        let drops = Cell::new(0);
        let mut block = [const { MaybeUninit::<Token>::uninit() }; 3];
        let mut v = BoundVec::new(&mut block);
        v.push(Token(&drops, 1)).unwrap();
        v.push(Token(&drops, 2)).unwrap();
        v.clear();
        assert_eq!(drops.get(), 2);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
        // The block is reusable after clear.
        v.push(Token(&drops, 3)).unwrap();
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_container_drop_destroys_live_elements() {
        let drops = Cell::new(0);
        let mut block = [const { MaybeUninit::<Token>::uninit() }; 4];
        {
            let mut v = BoundVec::new(&mut block);
            v.push(Token(&drops, 1)).unwrap();
            v.push(Token(&drops, 2)).unwrap();
            v.push(Token(&drops, 3)).unwrap();
            v.pop();
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_swap_with_exchanges_blocks() {
        let mut block_a = [const { MaybeUninit::<i32>::uninit() }; 2];
        let mut block_b = [const { MaybeUninit::<i32>::uninit() }; 6];
        let mut a = BoundVec::new(&mut block_a);
        let mut b = BoundVec::new(&mut block_b);
        a.push(1).unwrap();
        b.extend_from_slice(&[10, 20, 30]).unwrap();

        a.swap_with(&mut b);
        assert_eq!(a.capacity(), 6);
        assert_eq!(a.as_slice(), &[10, 20, 30]);
        assert_eq!(b.capacity(), 2);
        assert_eq!(b.as_slice(), &[1]);

        // Swap back restores the original views.
        b.swap_with(&mut a);
        assert_eq!(a.as_slice(), &[1]);
        assert_eq!(b.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_contains_and_getters() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[7, 8, 9]).unwrap();
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        assert_eq!(v.as_slice(), &[7, 80, 9]);
        let len = v.len();
        assert_eq!(v.get(len), None);
        assert!(v.get_mut(len - 1).is_some());
    }

    #[test]
    fn test_first_and_last_mut() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[1, 2, 3]).unwrap();

        if let Some(first) = v.first_mut() {
            *first = 10;
        }
        if let Some(last) = v.last_mut() {
            *last = 30;
        }
        assert_eq!(v.as_slice(), &[10, 2, 30]);

        let mut empty_block = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut empty = BoundVec::new(&mut empty_block);
        assert!(empty.first_mut().is_none());
        assert!(empty.last_mut().is_none());
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 3];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[1, 2]).unwrap();
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_slice(), &[1, 22]);
        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[1, 22]);
        let amut: &mut [i32] = v.as_mut();
        amut[0] = 11;
        assert_eq!(v.as_slice(), &[11, 22]);
    }

    #[test]
    fn test_iter_and_iter_mut() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[1, 2, 3, 4]).unwrap();

        let collected: alloc::vec::Vec<_> = v.iter().copied().collect();
        assert_eq!(collected, alloc::vec![1, 2, 3, 4]);

        // Reverse iteration over the live range.
        let reversed: alloc::vec::Vec<_> = v.iter().rev().copied().collect();
        assert_eq!(reversed, alloc::vec![4, 3, 2, 1]);

        for x in v.iter_mut() {
            *x *= 2;
        }
        assert_eq!(v.as_slice(), &[2, 4, 6, 8]);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_eq_ord_partial_ord_hash_via_slice() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let mut block_a = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut block_b = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut block_c = [const { MaybeUninit::<i32>::uninit() }; 4];
        let mut a = BoundVec::new(&mut block_a);
        let mut b = BoundVec::new(&mut block_b);
        let mut c = BoundVec::new(&mut block_c);
        a.extend_from_slice(&[1, 2, 3]).unwrap();
        b.extend_from_slice(&[1, 2, 3]).unwrap();
        c.extend_from_slice(&[1, 2, 4]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));
        assert_eq!(a, [1, 2, 3][..]);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_structure() {
        use alloc::format;
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 5];
        let mut v = BoundVec::new(&mut block);
        v.extend_from_slice(&[1, 2]).unwrap();
        let dbg = format!("{v:?}");
        assert!(dbg.contains("BoundVec"));
        assert!(dbg.contains("len"));
        assert!(dbg.contains("capacity"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_zero_capacity_block_behaves() {
        let mut block: [MaybeUninit<u8>; 0] = [];
        let mut v = BoundVec::new(&mut block);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.is_full());

        assert_eq!(v.push(1), Err(crate::Error::Full));
        assert_eq!(v.extend_from_slice(&[1, 2]), Err(crate::Error::Full));
        assert_eq!(v.extend_from_slice_truncated(&[1, 2, 3]), 0);

        assert_eq!(v.resize(0, 9), Ok(()));
        assert_eq!(v.resize(1, 9), Err(crate::Error::Full));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_zero_sized_type_supports_capacity() {
        // ZST like () should work; capacity and len arithmetic stay correct.
        let mut block = [const { MaybeUninit::<()>::uninit() }; 4];
        let mut v = BoundVec::new(&mut block);
        assert_eq!(v.len(), 0);
        v.push(()).unwrap();
        v.push(()).unwrap();
        assert_eq!(v.len(), 2);
        v.truncate(1);
        assert_eq!(v.len(), 1);
        v.resize(4, ()).unwrap();
        assert!(v.is_full());
    }

    #[test]
    fn test_eight_slot_block_walkthrough() {
        // Bind an 8-slot integer block and walk it through an
        // append / insert / remove / pop sequence.
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 8];
        let mut v = BoundVec::new(&mut block);

        v.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        v.insert(1, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
        assert_eq!(v.len(), 4);

        assert_eq!(v.remove(0), Some(1));
        assert_eq!(v.as_slice(), &[9, 2, 3]);
        assert_eq!(v.len(), 3);

        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.as_slice(), &[9, 2]);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_two_slot_overflow_is_all_or_nothing() {
        let mut block = [const { MaybeUninit::<i32>::uninit() }; 2];
        let mut v = BoundVec::new(&mut block);

        // Rejected as a whole: nothing is appended.
        assert_eq!(v.extend_from_slice(&[1, 2, 3]), Err(crate::Error::Full));
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 2);

        // With prior contents the rejection leaves them intact too.
        v.push(5).unwrap();
        assert_eq!(v.extend_from_slice(&[1, 2]), Err(crate::Error::Full));
        assert_eq!(v.as_slice(), &[5]);
        assert_eq!(v.capacity(), 2);
    }
}
