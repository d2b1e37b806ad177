//! Bulk construct-from-source.
//!
//! [`construct_from_source`] copies `[begin, end)` into raw destination
//! slots using the strategy [`copy_strategy`] picks. The three strategies
//! are public for callers that have already made the decision themselves.

use core::ptr;

use emplace_core::{Cursor, Element, RandomAccessCursor};

use crate::error::ConstructError;
use crate::strategy::{copy_strategy, CopyStrategy};
use crate::support::byte_len;

/// Construct a copy of every value in `[begin, end)` into the raw slots
/// starting at `dest`, in order. Returns the cursor one past the last slot
/// written.
///
/// On an empty source range nothing is written and `dest` is returned
/// unchanged.
///
/// # Safety
///
/// - `[begin, end)` is a valid range of live values: `end` is reachable
///   from `begin` by [`advance`](Cursor::advance).
/// - `dest` addresses at least as many writable slots as the source has
///   values. Those slots hold no live value; anything in them is
///   overwritten without being dropped.
/// - Source and destination do not overlap, unless the element is
///   trivially copyable and both cursor types are random-access. In that
///   case overlap is allowed and the result is as if every value were read
///   before any slot was written.
///
/// # Panics
///
/// Propagates a panic from `Clone::clone`. Values constructed before the
/// panicking one stay in their slots and are not dropped.
///
/// # Zero-sized types
///
/// A pointer range over a zero-sized type is empty, so nothing is cloned
/// and `dest` comes back unchanged. Use
/// [`clone_into_uninit`](crate::clone_into_uninit) to clone zero-sized
/// values once per slot.
///
/// # Example
///
/// ```
/// use core::mem::MaybeUninit;
/// use emplace_construct::construct_from_source;
///
/// let src = [1u32, 2, 3, 4, 5];
/// let mut dst = [MaybeUninit::<u32>::uninit(); 5];
///
/// let range = src.as_ptr_range();
/// let dest = dst.as_mut_ptr().cast::<u32>();
/// // SAFETY: `dst` has five raw slots and does not overlap `src`.
/// let end = unsafe { construct_from_source(range.start, range.end, dest) };
///
/// assert_eq!(end, dest.wrapping_add(5));
/// // SAFETY: all five slots were just initialized.
/// let dst = dst.map(|slot| unsafe { slot.assume_init() });
/// assert_eq!(dst, src);
/// ```
#[inline]
pub unsafe fn construct_from_source<S, D>(begin: S, end: S, dest: D) -> D
where
    S: Cursor,
    D: Cursor<Value = S::Value>,
    S::Value: Element,
{
    let strategy = copy_strategy::<S, D>();
    trace_event!(trace, ?strategy, "construct_from_source");

    match strategy {
        CopyStrategy::BulkMove => {
            match (
                begin.into_random_access(),
                end.into_random_access(),
                dest.into_random_access(),
            ) {
                (Ok(begin), Ok(end), Ok(dest)) => {
                    // SAFETY: forwarded caller contract; the element is
                    // trivially copyable and both cursors are random-access,
                    // which is what `BulkMove` was selected on.
                    match unsafe { bulk_move(&begin, &end, &dest) } {
                        Ok(written) => D::from_random_access(written),
                        // A contiguous range cannot span more than
                        // `isize::MAX` bytes, so pointer cursors never get
                        // here; only a cursor reporting an oversized
                        // distance does.
                        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
                        Err(overflow) => {
                            trace_event!(
                                warn,
                                %overflow,
                                "bulk move overflow, assigning per element"
                            );
                            // SAFETY: nothing was written; same contract,
                            // trivially copyable element.
                            unsafe {
                                assign_each(
                                    S::from_random_access(begin),
                                    S::from_random_access(end),
                                    D::from_random_access(dest),
                                )
                            }
                        }
                    }
                }
                // Unreachable for cursors honouring the `RANDOM_ACCESS`
                // contract; degrade to the per-element path regardless.
                (begin, end, dest) => {
                    // SAFETY: forwarded caller contract, trivially copyable
                    // element.
                    unsafe { assign_each(demote(begin), demote(end), demote(dest)) }
                }
            }
        }
        // SAFETY: forwarded caller contract; `AssignEach` is only selected
        // for trivially copyable elements.
        CopyStrategy::AssignEach => unsafe { assign_each(begin, end, dest) },
        // SAFETY: forwarded caller contract.
        CopyStrategy::ConstructEach => unsafe { construct_each(begin, end, dest) },
    }
}

/// Return a cursor from whichever form the capability probe left it in.
fn demote<C: Cursor>(probed: Result<C::RandomAccess, C>) -> C {
    match probed {
        Ok(cursor) => C::from_random_access(cursor),
        Err(cursor) => cursor,
    }
}

/// Copy `[begin, end)` to `dest` as one block with memmove semantics.
///
/// Returns the cursor one past the last slot written. If the byte length of
/// the range does not fit in `isize`, nothing is written and
/// [`ConstructError::LengthOverflow`] is returned.
///
/// # Safety
///
/// As for [`construct_from_source`], and additionally the element must be
/// trivially copyable: the values are duplicated by copying bytes. Overlap
/// between source and destination is allowed.
#[inline]
pub unsafe fn bulk_move<S, D>(begin: &S, end: &S, dest: &D) -> Result<D, ConstructError>
where
    S: RandomAccessCursor,
    D: RandomAccessCursor<Value = S::Value>,
{
    // SAFETY: `end` is reachable from `begin` per caller contract.
    let count = unsafe { begin.distance_to(end) };
    byte_len::<S::Value>(count)?;
    // SAFETY: random-access cursors address contiguous slots, so `count`
    // values starting at each slot are in bounds; the byte length fits in
    // `isize`; `ptr::copy` tolerates overlap.
    unsafe {
        ptr::copy(begin.slot().cast_const(), dest.slot(), count);
        Ok(dest.offset(count))
    }
}

/// Copy `[begin, end)` to `dest` one value at a time by bitwise assignment.
///
/// No `Clone` is invoked. Returns the cursor one past the last slot
/// written.
///
/// # Safety
///
/// As for [`construct_from_source`] without the overlap allowance, and the
/// element must be trivially copyable.
#[inline]
pub unsafe fn assign_each<S, D>(mut begin: S, end: S, mut dest: D) -> D
where
    S: Cursor,
    D: Cursor<Value = S::Value>,
    S::Value: Element,
{
    debug_assert!(<S::Value as Element>::TRIVIALLY_COPYABLE);
    while begin != end {
        // SAFETY: `begin` addresses a live value and `dest` a raw slot; the
        // value is trivially copyable, so the bitwise copy is an
        // independent value and the original keeps its own.
        unsafe {
            ptr::write(dest.slot(), ptr::read(begin.slot()));
            begin.advance();
            dest.advance();
        }
    }
    dest
}

/// Copy `[begin, end)` to `dest` by writing `value.clone()` into each slot,
/// in source order.
///
/// Returns the cursor one past the last slot written.
///
/// # Safety
///
/// As for [`construct_from_source`] without the overlap allowance.
///
/// # Panics
///
/// Propagates a panic from `Clone::clone`. Values already written stay in
/// place and are not dropped.
#[inline]
pub unsafe fn construct_each<S, D>(mut begin: S, end: S, mut dest: D) -> D
where
    S: Cursor,
    D: Cursor<Value = S::Value>,
    S::Value: Clone,
{
    while begin != end {
        // SAFETY: `begin` addresses a live value, `dest` a raw slot that the
        // write initializes without dropping its previous contents.
        unsafe {
            let value = (*begin.slot()).clone();
            ptr::write(dest.slot(), value);
            begin.advance();
            dest.advance();
        }
    }
    dest
}
