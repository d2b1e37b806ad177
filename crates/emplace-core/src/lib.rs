//! Core traits for constructing values into uninitialized storage.
//!
//! This is the leaf crate of the emplace workspace. It defines the two
//! static facts the construction dispatchers in `emplace-construct` decide
//! on, and nothing else:
//!
//! - [`Element`]: is a value type *trivially copyable* (duplicable by a raw
//!   byte copy, no drop glue)?
//! - [`Cursor`] / [`RandomAccessCursor`]: does a position type support O(1)
//!   offset and distance, or only single-step advance?
//!
//! Both facts are associated constants, so every decision made on them is
//! resolved at compile time.
//!
//! # Crate features
//!
//! - `alloc` (default): [`Element`] impls for `String`, `Vec`, `Box`, `Rc`
//!   and `Arc`.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cursor;
pub mod element;

pub use cursor::{Cursor, Forward, NotRandomAccess, RandomAccessCursor};
pub use element::Element;

#[doc(hidden)]
pub mod __private {
    /// Compile-time witness used by [`trivially_copyable!`](crate::trivially_copyable).
    pub const fn assert_copy<T: Copy>() {}
}
