//! The strategy decision tables.
//!
//! Both selectors are `const fn`s over associated constants. The
//! dispatchers match on their result, and because the result is a constant
//! for every instantiation the optimizer keeps only the chosen arm.

use emplace_core::{Cursor, Element};

/// How [`construct_from_source`](crate::construct_from_source) populates the
/// destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CopyStrategy {
    /// One block copy with memmove semantics
    /// ([`bulk_move`](crate::copy::bulk_move)).
    BulkMove,
    /// Lockstep bitwise assignment, no `Clone`
    /// ([`assign_each`](crate::copy::assign_each)).
    AssignEach,
    /// Lockstep `Clone` into each slot
    /// ([`construct_each`](crate::copy::construct_each)).
    ConstructEach,
}

/// How [`construct_from_template`](crate::construct_from_template)
/// populates the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillStrategy {
    /// Bitwise assignment of the template into every slot
    /// ([`assign_fill`](crate::fill::assign_fill)).
    AssignEach,
    /// `Clone` of the template into every slot
    /// ([`construct_fill`](crate::fill::construct_fill)).
    ConstructEach,
}

/// The copy strategy for source cursor `S` and destination cursor `D`.
///
/// | trivially copyable | `S` random-access | `D` random-access | strategy |
/// |---|---|---|---|
/// | yes | yes | yes | [`CopyStrategy::BulkMove`] |
/// | yes | not both | | [`CopyStrategy::AssignEach`] |
/// | no | any | any | [`CopyStrategy::ConstructEach`] |
///
/// ```
/// use emplace_construct::{copy_strategy, CopyStrategy};
/// use emplace_core::Forward;
///
/// assert_eq!(copy_strategy::<*const u32, *mut u32>(), CopyStrategy::BulkMove);
/// assert_eq!(
///     copy_strategy::<Forward<*const u32>, *mut u32>(),
///     CopyStrategy::AssignEach,
/// );
/// assert_eq!(
///     copy_strategy::<*const String, *mut String>(),
///     CopyStrategy::ConstructEach,
/// );
/// ```
pub const fn copy_strategy<S, D>() -> CopyStrategy
where
    S: Cursor,
    D: Cursor<Value = S::Value>,
    S::Value: Element,
{
    if !<S::Value as Element>::TRIVIALLY_COPYABLE {
        CopyStrategy::ConstructEach
    } else if S::RANDOM_ACCESS && D::RANDOM_ACCESS {
        CopyStrategy::BulkMove
    } else {
        CopyStrategy::AssignEach
    }
}

/// The fill strategy for destination cursor `C`.
///
/// Depends only on the element type; any cursor works.
pub const fn fill_strategy<C>() -> FillStrategy
where
    C: Cursor,
    C::Value: Element,
{
    if <C::Value as Element>::TRIVIALLY_COPYABLE {
        FillStrategy::AssignEach
    } else {
        FillStrategy::ConstructEach
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr::NonNull;
    use emplace_core::Forward;

    #[test]
    fn trivial_random_access_pairs_move_in_bulk() {
        assert_eq!(copy_strategy::<*const u8, *mut u8>(), CopyStrategy::BulkMove);
        assert_eq!(
            copy_strategy::<*mut [u32; 4], NonNull<[u32; 4]>>(),
            CopyStrategy::BulkMove
        );
    }

    #[test]
    fn one_sequential_side_means_assignment() {
        assert_eq!(
            copy_strategy::<Forward<*const u64>, *mut u64>(),
            CopyStrategy::AssignEach
        );
        assert_eq!(
            copy_strategy::<*const u64, Forward<*mut u64>>(),
            CopyStrategy::AssignEach
        );
        assert_eq!(
            copy_strategy::<Forward<*const u64>, Forward<*mut u64>>(),
            CopyStrategy::AssignEach
        );
    }

    #[test]
    fn non_trivial_elements_always_construct() {
        assert_eq!(
            copy_strategy::<*const String, *mut String>(),
            CopyStrategy::ConstructEach
        );
        assert_eq!(
            copy_strategy::<Forward<*const Vec<u8>>, *mut Vec<u8>>(),
            CopyStrategy::ConstructEach
        );
    }

    #[test]
    fn fill_follows_the_element() {
        assert_eq!(fill_strategy::<*mut i32>(), FillStrategy::AssignEach);
        assert_eq!(fill_strategy::<Forward<*mut i32>>(), FillStrategy::AssignEach);
        assert_eq!(fill_strategy::<*mut String>(), FillStrategy::ConstructEach);
    }

    #[test]
    fn selection_is_a_constant() {
        const CHOSEN: CopyStrategy = copy_strategy::<*const f32, *mut f32>();
        assert_eq!(CHOSEN, CopyStrategy::BulkMove);
    }
}
