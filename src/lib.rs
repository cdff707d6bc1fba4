// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bound-vec`
//!
//! A `no_std`, fixed-capacity vector that lives entirely inside a contiguous
//! block of memory supplied by the caller. It never allocates, reallocates,
//! or frees storage itself.
//!
//! The core type, [`BoundVec<'a, T>`], borrows a block of possibly
//! uninitialized slots (`&'a mut [MaybeUninit<T>]`) and tracks a logical
//! length `len ∈ 0..=capacity`, where the capacity is the length of the
//! borrowed block and is fixed for the container's lifetime.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - Dynamic allocation is unavailable or undesirable (embedded, real-time,
//!   interrupt context, `no_std`).
//! - Storage comes from somewhere else: a stack array, a static buffer, or an
//!   arena slab.
//! - You still want ordinary vector ergonomics: indexing, iteration,
//!   insertion, removal, bulk append.
//!
//! It is not the right fit if you need growth (use `Vec` or a growable
//! arena-backed type) or if the container should own its storage (use an
//! inline fixed-capacity vector such as `arrayvec` or `heapless::Vec`).
//!
//! ## Storage model
//!
//! ```text
//! caller's block:  [ live elements ........ | raw, uninitialized slots ]
//!                  ^                        ^                          ^
//!                  start                    start + len       start + capacity
//! ```
//!
//! - Slots in `[0, len)` hold initialized `T` values and are the only ones
//!   visible through safe APIs.
//! - Slots in `[len, capacity)` are uninitialized memory; the container never
//!   reads them as `T` and never writes outside the borrowed block.
//! - The container owns the *lifetimes* of the elements it constructs: on
//!   `clear`, on shrinking operations, and on drop it runs the destructor of
//!   every live element exactly once. The block itself outlives the container
//!   and remains the caller's to reclaim.
//!
//! ## Capacity overflow handling
//!
//! Operations that may exceed capacity come in two flavors:
//!
//! - **Fallible**: return [`Error::Full`] and leave the vector unchanged
//!   (e.g. [`BoundVec::push`], [`BoundVec::insert`],
//!   [`BoundVec::extend_from_slice`], [`BoundVec::append_fill`],
//!   [`BoundVec::assign_from_slice`], [`BoundVec::try_extend_from_iter`],
//!   [`BoundVec::try_clone_from`], [`BoundVec::try_move_from`]).
//!   Bulk variants are all-or-nothing: either everything fits and is applied,
//!   or nothing is.
//! - **Saturating**: apply as much as fits and report how much (e.g.
//!   [`BoundVec::extend_from_slice_truncated`],
//!   [`BoundVec::clone_from_truncated`], and the [`Extend`] impl, which takes
//!   elements from the iterator only while there is room).
//!
//! Index and range errors panic, exactly like built-in slices: they signal a
//! caller bug, not a runtime condition to handle. Capacity-related failures
//! never panic.
//!
//! ## Example
//!
//! ```rust
//! use bound_vec::BoundVec;
//! use core::mem::MaybeUninit;
//!
//! let mut block = [const { MaybeUninit::<u32>::uninit() }; 8];
//! let mut v = BoundVec::new(&mut block);
//!
//! v.extend_from_slice(&[1, 2, 3]).unwrap();
//! v.insert(1, 9).unwrap();
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//!
//! v.remove(0);
//! v.pop();
//! assert_eq!(v.as_slice(), &[9, 2]);
//! assert_eq!(v.capacity(), 8);
//! ```
//!
//! ## Features
//!
//! - `serde`
//!   - `Serialize` emits the live contents as a sequence.
//!   - Deserialization is **in-place** through `serde::de::DeserializeSeed`
//!     for `&mut BoundVec`, since a borrowed-storage container cannot
//!     conjure a block of its own.
//!
//! ## Safety
//!
//! The public API is fully safe with three deliberate exceptions:
//! [`BoundVec::push_unchecked`] and [`BoundVec::set_len`], zero-overhead
//! fast paths for callers that have already proven capacity, and
//! [`BoundVec::spare_capacity_mut`], whose slots must only ever receive
//! initialized values (a block bound from `&mut [T]` is read as `[T]` again
//! by its owner after the borrow ends, so de-initializing a slot would
//! corrupt the caller's memory). Internal `unsafe` is confined to the
//! live-prefix invariant documented in [`BoundVec`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::BoundVec;
