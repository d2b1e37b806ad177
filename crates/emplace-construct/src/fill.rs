//! Bulk construct-from-template.
//!
//! [`construct_from_template`] fills the raw slots `[begin, end)` with
//! copies of one value. Unlike a pointer-only fill it accepts any
//! [`Cursor`]; pointer cursors are the common case.

use core::ptr;

use emplace_core::{Cursor, Element};

use crate::strategy::{fill_strategy, FillStrategy};

/// Construct an independent copy of `value` in every raw slot of
/// `[begin, end)`, in range order.
///
/// On an empty range nothing is written.
///
/// # Safety
///
/// - `end` is reachable from `begin` by [`advance`](Cursor::advance).
/// - Every slot in the range is writable and holds no live value; anything
///   in it is overwritten without being dropped.
/// - `value` does not live inside the range.
///
/// # Panics
///
/// Propagates a panic from `Clone::clone`. Slots filled before the
/// panicking clone stay initialized and are not dropped.
///
/// # Zero-sized types
///
/// A pointer range over a zero-sized type is empty, so nothing is cloned.
/// Use [`fill_uninit`](crate::fill_uninit) to clone zero-sized values once
/// per slot.
///
/// # Example
///
/// ```
/// use core::mem::MaybeUninit;
/// use emplace_construct::construct_from_template;
///
/// let mut slots = [MaybeUninit::<i32>::uninit(); 4];
/// let range = slots.as_mut_ptr_range();
/// // SAFETY: four raw, writable slots.
/// unsafe { construct_from_template(range.start.cast::<i32>(), range.end.cast::<i32>(), &7) };
///
/// // SAFETY: every slot was just initialized.
/// let slots = slots.map(|slot| unsafe { slot.assume_init() });
/// assert_eq!(slots, [7; 4]);
/// ```
#[inline]
pub unsafe fn construct_from_template<C>(begin: C, end: C, value: &C::Value)
where
    C: Cursor,
    C::Value: Element,
{
    let strategy = fill_strategy::<C>();
    trace_event!(trace, ?strategy, "construct_from_template");

    match strategy {
        // SAFETY: forwarded caller contract; `AssignEach` is only selected
        // for trivially copyable elements.
        FillStrategy::AssignEach => unsafe { assign_fill(begin, end, value) },
        // SAFETY: forwarded caller contract.
        FillStrategy::ConstructEach => unsafe { construct_fill(begin, end, value) },
    }
}

/// Fill `[begin, end)` by bitwise-assigning `value` into every slot.
///
/// No `Clone` is invoked.
///
/// # Safety
///
/// As for [`construct_from_template`], and the element must be trivially
/// copyable.
#[inline]
pub unsafe fn assign_fill<C>(mut begin: C, end: C, value: &C::Value)
where
    C: Cursor,
    C::Value: Element,
{
    debug_assert!(<C::Value as Element>::TRIVIALLY_COPYABLE);
    let src: *const C::Value = value;
    while begin != end {
        // SAFETY: `begin` addresses a raw slot disjoint from `value`, and a
        // bitwise copy of a trivially copyable value is independent of it.
        unsafe {
            ptr::copy_nonoverlapping(src, begin.slot(), 1);
            begin.advance();
        }
    }
}

/// Fill `[begin, end)` by writing `value.clone()` into every slot.
///
/// # Safety
///
/// As for [`construct_from_template`].
///
/// # Panics
///
/// Propagates a panic from `Clone::clone`; earlier slots stay initialized
/// and are not dropped.
#[inline]
pub unsafe fn construct_fill<C>(mut begin: C, end: C, value: &C::Value)
where
    C: Cursor,
    C::Value: Clone,
{
    while begin != end {
        // SAFETY: `begin` addresses a raw slot; the write initializes it
        // without dropping its previous contents.
        unsafe {
            ptr::write(begin.slot(), value.clone());
            begin.advance();
        }
    }
}
