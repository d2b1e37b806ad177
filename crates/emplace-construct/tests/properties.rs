//! Property tests for the construction primitives.

use emplace_construct::{
    clone_into_uninit, construct_from_source, construct_from_template, fill_uninit,
};
use emplace_core::Forward;
use emplace_test_utils::{Ledger, RawBuf, SlotChain};
use proptest::prelude::*;
use std::mem::MaybeUninit;

fn raw_slots<T>(n: usize) -> Vec<MaybeUninit<T>> {
    (0..n).map(|_| MaybeUninit::uninit()).collect()
}

proptest! {
    #[test]
    fn bulk_copy_reproduces_the_source(
        src in proptest::collection::vec(any::<u32>(), 0..256),
    ) {
        let mut dst = RawBuf::with_capacity(src.len());
        let range = src.as_ptr_range();
        // SAFETY: `src.len()` raw slots, disjoint from `src`.
        unsafe {
            construct_from_source(range.start, range.end, dst.as_mut_ptr());
            dst.set_len(src.len());
        }
        prop_assert_eq!(dst.as_slice(), src.as_slice());
    }

    #[test]
    fn assignment_matches_bulk_copy(
        src in proptest::collection::vec(any::<(u8, i64)>(), 0..64),
    ) {
        let mut bulk = RawBuf::with_capacity(src.len());
        let mut stepped = RawBuf::with_capacity(src.len());
        let range = src.as_ptr_range();
        // SAFETY: `src.len()` raw slots each.
        unsafe {
            construct_from_source(range.start, range.end, bulk.as_mut_ptr());
            construct_from_source(
                Forward::new(range.start),
                Forward::new(range.end),
                stepped.as_mut_ptr(),
            );
            bulk.set_len(src.len());
            stepped.set_len(src.len());
        }
        prop_assert_eq!(bulk.as_slice(), stepped.as_slice());
    }

    #[test]
    fn cloned_strings_equal_the_source(
        src in proptest::collection::vec(".{0,12}", 0..32),
    ) {
        let mut storage = raw_slots::<String>(src.len());
        let copied = clone_into_uninit(&src, &mut storage).unwrap();
        prop_assert_eq!(&*copied, src.as_slice());
        for value in copied.iter_mut() {
            // SAFETY: each value was constructed once and is dropped once.
            unsafe { std::ptr::drop_in_place(value) };
        }
    }

    #[test]
    fn every_value_is_cloned_once_in_order(n in 0usize..40) {
        let ledger = Ledger::new();
        let src: Vec<_> = (0..n as u32).map(|id| ledger.track(id, "v")).collect();
        let mut dst = RawBuf::with_capacity(n);
        let range = src.as_ptr_range();
        // SAFETY: `n` raw slots.
        unsafe {
            construct_from_source(range.start, range.end, dst.as_mut_ptr());
            dst.set_len(n);
        }
        prop_assert_eq!(ledger.clones(), (0..n as u32).collect::<Vec<_>>());
    }

    #[test]
    fn overlapping_bulk_copy_matches_copy_within(
        data in proptest::collection::vec(any::<u16>(), 1..128),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        d in any::<prop::sample::Index>(),
    ) {
        let len = data.len();
        let (start, end) = {
            let (x, y) = (a.index(len + 1), b.index(len + 1));
            (x.min(y), x.max(y))
        };
        let count = end - start;
        let dest = d.index(len - count + 1);

        let mut expected = data.clone();
        expected.copy_within(start..end, dest);

        let mut actual = data;
        let base = actual.as_mut_ptr();
        // SAFETY: both ranges lie within `actual`; `u16` is trivially
        // copyable and pointers are random-access, so overlap is allowed.
        unsafe {
            construct_from_source(
                base.add(start).cast_const(),
                base.add(end).cast_const(),
                base.add(dest),
            );
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn fill_produces_independent_copies(
        n in 1usize..32,
        seed in ".{0,8}",
        victim in any::<prop::sample::Index>(),
    ) {
        let mut storage = raw_slots::<String>(n);
        let filled = fill_uninit(&mut storage, &seed);
        let i = victim.index(n);
        filled[i].push('!');
        for (j, value) in filled.iter().enumerate() {
            if j == i {
                prop_assert_eq!(value, &format!("{seed}!"));
            } else {
                prop_assert_eq!(value, &seed);
            }
        }
        for value in filled.iter_mut() {
            // SAFETY: each value was constructed once and is dropped once.
            unsafe { std::ptr::drop_in_place(value) };
        }
    }

    #[test]
    fn template_fill_reaches_every_chain_slot(n in 0usize..32, value in any::<i64>()) {
        let mut chain = SlotChain::with_slots(n);
        // SAFETY: `n` raw slots.
        unsafe {
            construct_from_template(chain.begin(), chain.end(), &value);
            chain.set_init(n);
        }
        prop_assert_eq!(chain.to_vec(), vec![value; n]);
    }
}
