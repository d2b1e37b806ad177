//! Bulk construction into uninitialized storage.
//!
//! Containers that separate allocation from construction need to populate
//! raw slots that hold no live value yet. Assigning into such a slot would
//! drop garbage, so this crate provides two dedicated primitives:
//!
//! - [`construct_from_source`]: copy a source range into raw slots.
//! - [`construct_from_template`]: fill raw slots with copies of one value.
//!
//! Each primitive picks an implementation strategy from two static facts,
//! [`Element::TRIVIALLY_COPYABLE`](emplace_core::Element::TRIVIALLY_COPYABLE)
//! and [`Cursor::RANDOM_ACCESS`](emplace_core::Cursor::RANDOM_ACCESS). The
//! choice is a constant expression, so no strategy costs a runtime branch.
//!
//! ```text
//! construct_from_source(begin, end, dest)
//! ├── trivially copyable, both cursors random-access → bulk_move (memmove)
//! │   └── byte length overflows isize              → assign_each
//! ├── trivially copyable, otherwise                  → assign_each
//! └── not trivially copyable                          → construct_each (Clone)
//!
//! construct_from_template(begin, end, value)
//! ├── trivially copyable                              → assign_fill
//! └── not trivially copyable                          → construct_fill (Clone)
//! ```
//!
//! # Failure
//!
//! The primitives report nothing. A panicking `Clone` unwinds straight to
//! the caller and the elements constructed before it stay in place: they
//! are neither dropped nor tracked. Capacity and aliasing requirements are
//! `# Safety` preconditions, never checked at runtime. The checked entry
//! points are the slice helpers in [`slice`].
//!
//! # Crate features
//!
//! - `tracing`: emit `trace` events for strategy selection and a `warn`
//!   event when the bulk move falls back on overflow.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Strategy-selection events, compiled out without the `tracing` feature.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod copy;
pub mod error;
pub mod fill;
pub mod slice;
pub mod strategy;
pub mod support;

pub use copy::construct_from_source;
pub use error::ConstructError;
pub use fill::construct_from_template;
pub use slice::{clone_into_uninit, fill_uninit};
pub use strategy::{copy_strategy, fill_strategy, CopyStrategy, FillStrategy};
pub use support::byte_len;
