//! Checked entry points over `MaybeUninit` slices.
//!
//! The slice types carry the capacity the raw primitives have to take on
//! trust, so these helpers are safe. They dispatch through the same
//! strategies as [`construct_from_source`] and [`construct_from_template`].
//!
//! The returned `&mut [T]` borrows the now-initialized slots. Dropping the
//! reference does not drop the values; the owner of the storage does that.

use core::mem::{self, MaybeUninit};
use core::slice;

use emplace_core::Element;

use crate::copy::construct_from_source;
use crate::error::ConstructError;
use crate::fill::construct_from_template;

/// Clone `src` into the front of `dst` and return the initialized prefix.
///
/// Slots of `dst` past `src.len()` are left untouched.
///
/// # Errors
///
/// [`ConstructError::CapacityExceeded`] if `dst` is shorter than `src`;
/// nothing is written in that case.
///
/// # Panics
///
/// Propagates a panic from `Clone::clone`; values written before it are
/// not dropped.
///
/// ```
/// use core::mem::MaybeUninit;
/// use emplace_construct::clone_into_uninit;
///
/// let names = [String::from("a"), String::from("bb")];
/// let mut storage = [const { MaybeUninit::<String>::uninit() }; 4];
///
/// let copied = clone_into_uninit(&names, &mut storage).unwrap();
/// assert_eq!(copied, names);
/// # for s in copied.iter_mut() { unsafe { core::ptr::drop_in_place(s) } }
/// ```
pub fn clone_into_uninit<'a, T: Element>(
    src: &[T],
    dst: &'a mut [MaybeUninit<T>],
) -> Result<&'a mut [T], ConstructError> {
    if dst.len() < src.len() {
        return Err(ConstructError::CapacityExceeded {
            requested: src.len(),
            capacity: dst.len(),
        });
    }
    let len = src.len();
    let dst = &mut dst[..len];

    if mem::size_of::<T>() == 0 {
        // Pointer ranges over a zero-sized type are empty, so construct by
        // index instead.
        for (slot, value) in dst.iter_mut().zip(src) {
            slot.write(value.clone());
        }
    } else {
        let range = src.as_ptr_range();
        // SAFETY: `dst` has exactly `len` raw slots, and a shared and an
        // exclusive borrow never overlap.
        unsafe { construct_from_source(range.start, range.end, dst.as_mut_ptr().cast::<T>()) };
    }

    // SAFETY: all `len` slots were initialized above.
    Ok(unsafe { slice::from_raw_parts_mut(dst.as_mut_ptr().cast::<T>(), len) })
}

/// Fill every slot of `dst` with a copy of `value` and return the
/// initialized slice.
///
/// # Panics
///
/// Propagates a panic from `Clone::clone`; slots filled before it are not
/// dropped.
///
/// ```
/// use core::mem::MaybeUninit;
/// use emplace_construct::fill_uninit;
///
/// let mut storage = [MaybeUninit::<u8>::uninit(); 3];
/// assert_eq!(fill_uninit(&mut storage, &0xAB), [0xAB; 3]);
/// ```
pub fn fill_uninit<'a, T: Element>(dst: &'a mut [MaybeUninit<T>], value: &T) -> &'a mut [T] {
    let len = dst.len();

    if mem::size_of::<T>() == 0 {
        for slot in dst.iter_mut() {
            slot.write(value.clone());
        }
    } else {
        let range = dst.as_mut_ptr_range();
        // SAFETY: the range is exactly `dst`, raw and writable; `value` is a
        // shared borrow and cannot live inside it.
        unsafe { construct_from_template(range.start.cast::<T>(), range.end.cast::<T>(), value) };
    }

    // SAFETY: all `len` slots were initialized above.
    unsafe { slice::from_raw_parts_mut(dst.as_mut_ptr().cast::<T>(), len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emplace_test_utils::{Ledger, Marker, Tracked};

    fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
        [const { MaybeUninit::uninit() }; N]
    }

    #[test]
    fn clone_into_longer_destination_leaves_tail_untouched() {
        let mut storage = uninit_array::<u16, 6>();
        let copied = clone_into_uninit(&[1u16, 2, 3], &mut storage).unwrap();
        assert_eq!(copied, [1, 2, 3]);
    }

    #[test]
    fn short_destination_is_rejected_before_writing() {
        let ledger = Ledger::new();
        let src = [ledger.track(0, "a"), ledger.track(1, "b")];
        let mut storage = uninit_array::<Tracked, 1>();
        let err = clone_into_uninit(&src, &mut storage).unwrap_err();
        assert_eq!(
            err,
            ConstructError::CapacityExceeded {
                requested: 2,
                capacity: 1,
            }
        );
        assert_eq!(ledger.clone_count(), 0);
    }

    #[test]
    fn zero_sized_elements_are_cloned_per_slot() {
        Marker::reset_clones();
        let src = [Marker, Marker, Marker];
        let mut storage = uninit_array::<Marker, 3>();
        let copied = clone_into_uninit(&src, &mut storage).unwrap();
        assert_eq!(copied.len(), 3);
        assert_eq!(Marker::clones(), 3);

        let mut more = uninit_array::<Marker, 2>();
        fill_uninit(&mut more, &Marker);
        assert_eq!(Marker::clones(), 5);
    }

    #[test]
    fn fill_returns_the_whole_slice() {
        let mut storage = uninit_array::<char, 5>();
        let filled = fill_uninit(&mut storage, &'z');
        filled[0] = 'a';
        assert_eq!(filled, ['a', 'z', 'z', 'z', 'z']);
    }

    #[test]
    fn empty_inputs_are_fine() {
        let mut storage = uninit_array::<u32, 0>();
        assert!(clone_into_uninit(&[], &mut storage).unwrap().is_empty());
        assert!(fill_uninit(&mut storage, &1).is_empty());
    }
}
