// This file is part of bound-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundVec`](crate::BoundVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: in place, through [`DeserializeSeed`] on
//!   `&mut BoundVec`.
//!
//! A `BoundVec` borrows its storage block, so a plain `Deserialize` impl
//! cannot exist: there is nowhere for the deserializer to conjure a block
//! from. Instead, bind a block first and hand the container to the
//! deserializer as a seed:
//!
//! ```rust
//! use bound_vec::BoundVec;
//! use core::mem::MaybeUninit;
//! use serde::de::DeserializeSeed;
//!
//! let mut block = [const { MaybeUninit::<i32>::uninit() }; 8];
//! let mut v = BoundVec::new(&mut block);
//!
//! let mut de = serde_json::Deserializer::from_str("[1,2,3]");
//! (&mut v).deserialize(&mut de).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! ```
//!
//! On any error the container is left empty, never partially filled.

// Crate imports
use crate::vec::BoundVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for BoundVec<'_, T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct FillVisitor<'v, 'a, T>(&'v mut BoundVec<'a, T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for FillVisitor<'_, '_, T> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "array or sequence with at most {} elements",
            self.0.capacity()
        )
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<(), A::Error> {
        let cap = self.0.capacity();
        self.0.clear();
        while let Some(elem) = a.next_element::<T>()? {
            self.0
                .push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {cap})")))?;
        }
        Ok(())
    }
}

impl<'de, 'a, T: Deserialize<'de>> de::DeserializeSeed<'de> for &mut BoundVec<'a, T> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, d: D) -> Result<(), D::Error> {
        let res = d.deserialize_seq(FillVisitor(&mut *self));
        if res.is_err() {
            // Deterministic on failure: empty, never a partial fill.
            self.clear();
        }
        res
    }
}
