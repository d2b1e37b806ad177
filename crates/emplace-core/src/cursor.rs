//! Cursor contracts and their capability classification.
//!
//! A [`Cursor`] is a position within a sequence of slots: it can expose the
//! address of the current slot and step to the next one. A
//! [`RandomAccessCursor`] additionally moves by arbitrary offsets and
//! measures distances in O(1), over contiguous slots.
//!
//! Capability is a static fact on every cursor type:
//!
//! - [`Cursor::RANDOM_ACCESS`] says whether the type supports the extended
//!   contract.
//! - [`Cursor::RandomAccess`] names the type that implements it. A
//!   random-access cursor names itself; a sequential cursor names the
//!   uninhabited [`NotRandomAccess`], so its "random-access form" can never
//!   be produced.
//!
//! Dispatchers read the constant to pick a strategy and use
//! [`Cursor::into_random_access`] to reach the extended contract, which is
//! how a generic function prefers the extended interface without
//! specialization.
//!
//! Raw pointers (`*const T`, `*mut T`) and [`NonNull`] are the pointer-shaped
//! random-access cursors. [`Forward`] hides the capability of any cursor.
//!
//! Pointer cursors over a zero-sized type address no storage: every range
//! between two such pointers is empty.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

/// A position within a sequence of slots.
///
/// # Safety
///
/// Implementations must uphold:
///
/// - [`slot`](Cursor::slot) returns the address of the slot at the current
///   position, valid for as long as the underlying storage is.
/// - two cursors compare equal exactly when they address the same position.
/// - [`RANDOM_ACCESS`](Cursor::RANDOM_ACCESS) is `true` exactly when
///   [`into_random_access`](Cursor::into_random_access) returns `Ok`, and
///   `from_random_access(c)` is the same position as `c`.
pub unsafe trait Cursor: Clone + PartialEq {
    /// Type of the values stored in the addressed slots.
    type Value;

    /// The random-access form of this cursor: `Self` for random-access
    /// cursors, [`NotRandomAccess`] otherwise.
    type RandomAccess: RandomAccessCursor<Value = Self::Value>;

    /// Whether this cursor type supports [`RandomAccessCursor`].
    const RANDOM_ACCESS: bool;

    /// Address of the slot at the current position.
    ///
    /// The slot may be uninitialized. Cursors over read-only sources hand
    /// out a `*mut` for uniformity; the construction primitives never write
    /// through a source cursor.
    fn slot(&self) -> *mut Self::Value;

    /// Step to the next position.
    ///
    /// # Safety
    ///
    /// The cursor must not already be at the end of its sequence.
    unsafe fn advance(&mut self);

    /// Convert into the random-access form, or give the cursor back if the
    /// type has none.
    fn into_random_access(self) -> Result<Self::RandomAccess, Self>;

    /// Convert back from the random-access form.
    fn from_random_access(cursor: Self::RandomAccess) -> Self;
}

/// The extended cursor contract: O(1) offset, O(1) distance, ordering.
///
/// # Safety
///
/// Slots are contiguous: for every `n` within the sequence,
/// `self.offset(n).slot() == self.slot().add(n)`. The bulk strategies copy
/// whole blocks of slots on the strength of this guarantee.
pub unsafe trait RandomAccessCursor: Cursor + PartialOrd {
    /// The cursor `n` positions further along.
    ///
    /// # Safety
    ///
    /// The resulting position must be within the sequence or one past its
    /// end.
    unsafe fn offset(&self, n: usize) -> Self;

    /// Number of positions from `self` to `end`.
    ///
    /// # Safety
    ///
    /// Both cursors must belong to the same sequence and `end` must not be
    /// before `self`.
    unsafe fn distance_to(&self, end: &Self) -> usize;
}

/// Uninhabited random-access form of a sequential cursor.
///
/// Sequential cursors name this as their [`Cursor::RandomAccess`] type. No
/// value of it can exist, so code holding one is unreachable.
pub struct NotRandomAccess<V> {
    never: Infallible,
    _value: PhantomData<fn() -> V>,
}

impl<V> NotRandomAccess<V> {
    /// Eliminate the impossible value.
    ///
    /// Sequential cursors implement [`Cursor::from_random_access`] with
    /// `cursor.absurd()`.
    pub fn absurd(&self) -> ! {
        match self.never {}
    }
}

impl<V> Clone for NotRandomAccess<V> {
    fn clone(&self) -> Self {
        self.absurd()
    }
}

impl<V> PartialEq for NotRandomAccess<V> {
    fn eq(&self, _: &Self) -> bool {
        self.absurd()
    }
}

impl<V> PartialOrd for NotRandomAccess<V> {
    fn partial_cmp(&self, _: &Self) -> Option<Ordering> {
        self.absurd()
    }
}

// SAFETY: uninhabited; no method can ever run.
unsafe impl<V> Cursor for NotRandomAccess<V> {
    type Value = V;
    type RandomAccess = Self;
    const RANDOM_ACCESS: bool = false;

    fn slot(&self) -> *mut V {
        self.absurd()
    }

    unsafe fn advance(&mut self) {
        self.absurd()
    }

    fn into_random_access(self) -> Result<Self, Self> {
        self.absurd()
    }

    fn from_random_access(cursor: Self) -> Self {
        cursor
    }
}

// SAFETY: uninhabited; no method can ever run.
unsafe impl<V> RandomAccessCursor for NotRandomAccess<V> {
    unsafe fn offset(&self, _: usize) -> Self {
        self.absurd()
    }

    unsafe fn distance_to(&self, _: &Self) -> usize {
        self.absurd()
    }
}

/// Distance in elements between two pointers into the same allocation.
///
/// # Safety
///
/// `begin` and `end` must be derived from the same allocation, with
/// `end >= begin`.
unsafe fn ptr_distance<T>(begin: *const T, end: *const T) -> usize {
    if mem::size_of::<T>() == 0 {
        return 0;
    }
    // SAFETY: same allocation and ordering per caller contract; `T` is not
    // zero-sized.
    let diff = unsafe { end.offset_from(begin) };
    debug_assert!(diff >= 0, "cursor range end precedes begin");
    diff as usize
}

// SAFETY: a pointer addresses exactly one slot, pointer equality is
// position equality, and consecutive elements are contiguous.
unsafe impl<T> Cursor for *const T {
    type Value = T;
    type RandomAccess = Self;
    const RANDOM_ACCESS: bool = true;

    #[inline]
    fn slot(&self) -> *mut T {
        self.cast_mut()
    }

    #[inline]
    unsafe fn advance(&mut self) {
        // SAFETY: caller guarantees the cursor is not at the end.
        *self = unsafe { self.add(1) };
    }

    #[inline]
    fn into_random_access(self) -> Result<Self, Self> {
        Ok(self)
    }

    #[inline]
    fn from_random_access(cursor: Self) -> Self {
        cursor
    }
}

// SAFETY: see the `Cursor` impl.
unsafe impl<T> RandomAccessCursor for *const T {
    #[inline]
    unsafe fn offset(&self, n: usize) -> Self {
        // SAFETY: caller keeps the result within the sequence.
        unsafe { self.add(n) }
    }

    #[inline]
    unsafe fn distance_to(&self, end: &Self) -> usize {
        // SAFETY: caller contract.
        unsafe { ptr_distance(*self, *end) }
    }
}

// SAFETY: as for `*const T`.
unsafe impl<T> Cursor for *mut T {
    type Value = T;
    type RandomAccess = Self;
    const RANDOM_ACCESS: bool = true;

    #[inline]
    fn slot(&self) -> *mut T {
        *self
    }

    #[inline]
    unsafe fn advance(&mut self) {
        // SAFETY: caller guarantees the cursor is not at the end.
        *self = unsafe { self.add(1) };
    }

    #[inline]
    fn into_random_access(self) -> Result<Self, Self> {
        Ok(self)
    }

    #[inline]
    fn from_random_access(cursor: Self) -> Self {
        cursor
    }
}

// SAFETY: as for `*const T`.
unsafe impl<T> RandomAccessCursor for *mut T {
    #[inline]
    unsafe fn offset(&self, n: usize) -> Self {
        // SAFETY: caller keeps the result within the sequence.
        unsafe { self.add(n) }
    }

    #[inline]
    unsafe fn distance_to(&self, end: &Self) -> usize {
        // SAFETY: caller contract.
        unsafe { ptr_distance(*self, *end) }
    }
}

// SAFETY: as for `*const T`.
unsafe impl<T> Cursor for NonNull<T> {
    type Value = T;
    type RandomAccess = Self;
    const RANDOM_ACCESS: bool = true;

    #[inline]
    fn slot(&self) -> *mut T {
        self.as_ptr()
    }

    #[inline]
    unsafe fn advance(&mut self) {
        // SAFETY: caller guarantees the cursor is not at the end, so the
        // successor is in bounds (or one past) and therefore non-null.
        *self = unsafe { self.add(1) };
    }

    #[inline]
    fn into_random_access(self) -> Result<Self, Self> {
        Ok(self)
    }

    #[inline]
    fn from_random_access(cursor: Self) -> Self {
        cursor
    }
}

// SAFETY: as for `*const T`.
unsafe impl<T> RandomAccessCursor for NonNull<T> {
    #[inline]
    unsafe fn offset(&self, n: usize) -> Self {
        // SAFETY: caller keeps the result within the sequence.
        unsafe { self.add(n) }
    }

    #[inline]
    unsafe fn distance_to(&self, end: &Self) -> usize {
        // SAFETY: caller contract.
        unsafe { ptr_distance(self.as_ptr().cast_const(), end.as_ptr().cast_const()) }
    }
}

/// Sequential view of any cursor.
///
/// Forwards [`slot`](Cursor::slot) and [`advance`](Cursor::advance) to the
/// wrapped cursor and reports no random-access capability, so dispatchers
/// fall back to their per-element strategies.
///
/// ```
/// use emplace_core::{Cursor, Forward};
///
/// let data = [1u32, 2, 3];
/// let begin = Forward::new(data.as_ptr());
///
/// assert!(<*const u32 as Cursor>::RANDOM_ACCESS);
/// assert!(!<Forward<*const u32> as Cursor>::RANDOM_ACCESS);
/// assert_eq!(begin.slot().cast_const(), data.as_ptr());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forward<C>(C);

impl<C: Cursor> Forward<C> {
    /// Wrap a cursor.
    pub fn new(cursor: C) -> Self {
        Forward(cursor)
    }

    /// The wrapped cursor at the current position.
    pub fn into_inner(self) -> C {
        self.0
    }
}

// SAFETY: positions, equality and slots are the wrapped cursor's; the
// capability is declared absent and the witness is uninhabited.
unsafe impl<C: Cursor> Cursor for Forward<C> {
    type Value = C::Value;
    type RandomAccess = NotRandomAccess<C::Value>;
    const RANDOM_ACCESS: bool = false;

    #[inline]
    fn slot(&self) -> *mut C::Value {
        self.0.slot()
    }

    #[inline]
    unsafe fn advance(&mut self) {
        // SAFETY: forwarded caller contract.
        unsafe { self.0.advance() }
    }

    #[inline]
    fn into_random_access(self) -> Result<Self::RandomAccess, Self> {
        Err(self)
    }

    #[inline]
    fn from_random_access(cursor: Self::RandomAccess) -> Self {
        cursor.absurd()
    }
}
