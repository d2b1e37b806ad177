//! Emplace: construct values into uninitialized storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the emplace sub-crates. Container implementations that manage their own
//! raw storage (vectors, ring buffers, arenas) use it to populate slots
//! that do not yet hold a live value.
//!
//! # Quick start
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use emplace::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Texel(u8, u8, u8);
//! emplace::trivially_copyable!(Texel);
//!
//! // Bitwise strategies for `Copy` payloads.
//! let row = [Texel(1, 2, 3); 4];
//! let mut storage = [MaybeUninit::<Texel>::uninit(); 8];
//! let copied = clone_into_uninit(&row, &mut storage).unwrap();
//! assert_eq!(copied, row);
//! assert_eq!(copy_strategy::<*const Texel, *mut Texel>(), CopyStrategy::BulkMove);
//!
//! // `Clone` for owning payloads.
//! let mut names = [const { MaybeUninit::<String>::uninit() }; 3];
//! let filled = fill_uninit(&mut names, &String::from("anon"));
//! assert!(filled.iter().all(|n| n == "anon"));
//! # for n in filled.iter_mut() { unsafe { core::ptr::drop_in_place(n) } }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `emplace-core` | `Element`, cursor traits, `Forward` |
//! | [`construct`] | `emplace-construct` | Construction primitives, strategies, errors |
//!
//! # Crate features
//!
//! - `alloc` (default): `Element` impls for the `alloc` owning types.
//! - `tracing`: strategy-selection events through `tracing`.

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element classification and cursor traits (`emplace-core`).
///
/// Declare element types with [`trivially_copyable!`] or [`element!`];
/// implement [`types::Cursor`] for custom storage.
pub use emplace_core as types;

/// Construction primitives and strategy selection (`emplace-construct`).
///
/// The unchecked primitives are [`construct::construct_from_source`] and
/// [`construct::construct_from_template`]; the individual strategies live
/// in [`construct::copy`] and [`construct::fill`].
pub use emplace_construct as construct;

pub use emplace_core::{element, trivially_copyable};

/// Common imports for typical emplace usage.
///
/// ```rust
/// use emplace::prelude::*;
/// ```
pub mod prelude {
    // Classification and cursors
    pub use emplace_core::{Cursor, Element, Forward, RandomAccessCursor};

    // Primitives
    pub use emplace_construct::{
        clone_into_uninit, construct_from_source, construct_from_template, fill_uninit,
    };

    // Strategy selection
    pub use emplace_construct::{copy_strategy, fill_strategy, CopyStrategy, FillStrategy};

    // Errors
    pub use emplace_construct::ConstructError;
}
