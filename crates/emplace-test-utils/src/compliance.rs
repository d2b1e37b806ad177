//! Cursor trait compliance test helpers.
//!
//! These functions verify that a cursor implementation satisfies the
//! contracts the construction strategies rely on. Reused for every cursor
//! type in the workspace (raw pointers, `NonNull`, `Forward`,
//! [`ChainCursor`](crate::ChainCursor)).
//!
//! Each helper walks a range, so each is `unsafe`: the caller vouches that
//! `end` is reachable from `begin` in exactly `len` steps.

use emplace_core::{Cursor, RandomAccessCursor};
use indexmap::IndexSet;

/// Assert that [`Cursor::RANDOM_ACCESS`] agrees with
/// [`Cursor::into_random_access`], and that converting back lands on the
/// same position.
pub fn assert_capability_consistent<C: Cursor>(cursor: C) {
    let original = cursor.clone();
    match cursor.into_random_access() {
        Ok(ra) => {
            assert!(
                C::RANDOM_ACCESS,
                "into_random_access succeeded but RANDOM_ACCESS is false"
            );
            assert!(
                C::from_random_access(ra) == original,
                "from_random_access(into_random_access(c)) moved the cursor"
            );
        }
        Err(back) => {
            assert!(
                !C::RANDOM_ACCESS,
                "into_random_access failed but RANDOM_ACCESS is true"
            );
            assert!(back == original, "rejected cursor came back moved");
        }
    }
}

/// Assert that `begin` reaches `end` in exactly `len` advances.
///
/// # Safety
///
/// `end` is reachable from `begin` in `len` steps.
pub unsafe fn assert_advance_reaches_end<C: Cursor>(begin: C, end: &C, len: usize) {
    let mut cursor = begin;
    for step in 0..len {
        assert!(cursor != *end, "reached end after {step} steps, expected {len}");
        // SAFETY: not at the end, per the check above.
        unsafe { cursor.advance() };
    }
    assert!(cursor == *end, "not at end after {len} steps");
}

/// Assert that the `len` positions of the range address distinct slots.
///
/// # Safety
///
/// As for [`assert_advance_reaches_end`].
pub unsafe fn assert_slots_distinct<C: Cursor>(begin: C, len: usize) {
    if std::mem::size_of::<C::Value>() == 0 {
        return;
    }
    let mut cursor = begin;
    let mut slots = IndexSet::with_capacity(len);
    for _ in 0..len {
        slots.insert(cursor.slot());
        // SAFETY: fewer than `len` steps taken.
        unsafe { cursor.advance() };
    }
    assert_eq!(slots.len(), len, "range addresses duplicate slots");
}

/// Assert that `offset(n)` agrees with `n` advances, that slots are
/// contiguous, and that `distance_to` and ordering are consistent.
///
/// # Safety
///
/// As for [`assert_advance_reaches_end`].
pub unsafe fn assert_offset_matches_advance<C: RandomAccessCursor>(begin: C, len: usize) {
    let mut stepped = begin.clone();
    for n in 0..=len {
        // SAFETY: `n <= len` stays within the range or one past it.
        let jumped = unsafe { begin.offset(n) };
        assert!(jumped == stepped, "offset({n}) disagrees with {n} advances");
        assert_eq!(
            jumped.slot(),
            begin.slot().wrapping_add(n),
            "slot {n} is not contiguous with slot 0"
        );
        assert!(begin <= jumped, "offset({n}) orders before its origin");
        if std::mem::size_of::<C::Value>() != 0 {
            // SAFETY: same sequence, `jumped` not before `begin`.
            let distance = unsafe { begin.distance_to(&jumped) };
            assert_eq!(distance, n, "distance_to(offset({n})) = {distance}");
        }
        if n < len {
            // SAFETY: fewer than `len` steps taken.
            unsafe { stepped.advance() };
        }
    }
}

/// Run the checks that apply to every cursor.
///
/// # Safety
///
/// As for [`assert_advance_reaches_end`].
pub unsafe fn run_sequential_compliance<C: Cursor>(begin: C, end: C, len: usize) {
    assert_capability_consistent(begin.clone());
    assert_capability_consistent(end.clone());
    // SAFETY: forwarded.
    unsafe {
        assert_advance_reaches_end(begin.clone(), &end, len);
        assert_slots_distinct(begin, len);
    }
}

/// Run every check, including the random-access ones.
///
/// # Safety
///
/// As for [`assert_advance_reaches_end`].
pub unsafe fn run_random_access_compliance<C: RandomAccessCursor>(begin: C, end: C, len: usize) {
    // SAFETY: forwarded.
    unsafe {
        run_sequential_compliance(begin.clone(), end.clone(), len);
        assert_offset_matches_advance(begin.clone(), len);
        assert!(begin.offset(len) == end, "offset(len) is not the end");
    }
}
