//! Test fixtures and helpers for emplace development.
//!
//! - [`fixtures`]: element types that record how they were duplicated
//!   ([`Ledger`]/[`Tracked`], [`Probe`], [`Marker`]).
//! - [`raw_buf`]: [`RawBuf`], owned uninitialized storage that drops only
//!   its initialized prefix.
//! - [`cursors`]: [`SlotChain`], a non-contiguous sequence with a
//!   sequential [`ChainCursor`].
//! - [`compliance`]: assertions every [`Cursor`](emplace_core::Cursor)
//!   implementation must pass.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod cursors;
pub mod fixtures;
pub mod raw_buf;

pub use cursors::{ChainCursor, SlotChain};
pub use fixtures::{Ledger, Marker, Probe, Tracked};
pub use raw_buf::RawBuf;
