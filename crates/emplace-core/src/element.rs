//! Element classification: the trivially-copyable oracle.
//!
//! [`Element`] attaches one static fact to a value type: whether a raw
//! byte copy of an instance is itself a valid, independent instance. The
//! construction dispatchers read [`Element::TRIVIALLY_COPYABLE`] to decide
//! between block moves and per-element `Clone`.
//!
//! Stable Rust cannot ask "is `T: Copy`?" of an arbitrary `T`, so the fact
//! is declared rather than inferred. Use [`trivially_copyable!`] for `Copy`
//! types (the macro checks `Copy` at compile time) and [`element!`] for
//! everything else.
//!
//! [`trivially_copyable!`]: crate::trivially_copyable
//! [`element!`]: crate::element

use core::marker::PhantomData;
use core::ptr::NonNull;

/// A value type the construction primitives can copy into raw storage.
///
/// # Safety
///
/// Setting [`TRIVIALLY_COPYABLE`](Element::TRIVIALLY_COPYABLE) to `true`
/// asserts that:
///
/// - duplicating an instance by copying its bytes yields a valid value that
///   shares no ownership with the original, and
/// - the type has no drop glue.
///
/// Every `Copy` type satisfies both. Implementations claiming `false` carry
/// no obligation beyond a correct `Clone`.
pub unsafe trait Element: Clone {
    /// Whether instances may be duplicated with a raw byte copy instead of
    /// [`Clone::clone`].
    const TRIVIALLY_COPYABLE: bool;
}

/// Query the oracle for `T`.
///
/// Equivalent to `<T as Element>::TRIVIALLY_COPYABLE`, usable in const
/// contexts.
pub const fn is_trivially_copyable<T: Element>() -> bool {
    T::TRIVIALLY_COPYABLE
}

/// Declare one or more `Copy` types as trivially copyable [`Element`]s.
///
/// Fails to compile if any listed type is not `Copy`.
///
/// ```
/// #[derive(Clone, Copy)]
/// struct Rgb(u8, u8, u8);
///
/// emplace_core::trivially_copyable!(Rgb);
///
/// assert!(emplace_core::element::is_trivially_copyable::<Rgb>());
/// ```
#[macro_export]
macro_rules! trivially_copyable {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: fn() = $crate::__private::assert_copy::<$ty>;

            // SAFETY: the constant above only compiles for `Copy` types, and
            // a `Copy` type is bytewise duplicable with no drop glue.
            unsafe impl $crate::Element for $ty {
                const TRIVIALLY_COPYABLE: bool = true;
            }
        )+
    };
}

/// Declare one or more `Clone` types as non-trivial [`Element`]s.
///
/// Values of these types are always duplicated through `Clone::clone`.
///
/// ```
/// #[derive(Clone)]
/// struct Name(String);
///
/// emplace_core::element!(Name);
///
/// assert!(!emplace_core::element::is_trivially_copyable::<Name>());
/// ```
#[macro_export]
macro_rules! element {
    ($($ty:ty),+ $(,)?) => {
        $(
            // SAFETY: claims nothing; every duplication goes through `Clone`.
            unsafe impl $crate::Element for $ty {
                const TRIVIALLY_COPYABLE: bool = false;
            }
        )+
    };
}

trivially_copyable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
    core::cmp::Ordering, core::time::Duration,
);

// SAFETY: shared references, raw pointers and markers are `Copy`.
unsafe impl<T: ?Sized> Element for &T {
    const TRIVIALLY_COPYABLE: bool = true;
}

// SAFETY: see above.
unsafe impl<T: ?Sized> Element for *const T {
    const TRIVIALLY_COPYABLE: bool = true;
}

// SAFETY: see above.
unsafe impl<T: ?Sized> Element for *mut T {
    const TRIVIALLY_COPYABLE: bool = true;
}

// SAFETY: see above.
unsafe impl<T: ?Sized> Element for NonNull<T> {
    const TRIVIALLY_COPYABLE: bool = true;
}

// SAFETY: see above.
unsafe impl<T: ?Sized> Element for PhantomData<T> {
    const TRIVIALLY_COPYABLE: bool = true;
}

// SAFETY: an `Option` of a bytewise-duplicable payload is bytewise
// duplicable, and has drop glue only if the payload does.
unsafe impl<T: Element> Element for Option<T> {
    const TRIVIALLY_COPYABLE: bool = T::TRIVIALLY_COPYABLE;
}

// SAFETY: arrays inherit both properties from their element.
unsafe impl<T: Element, const N: usize> Element for [T; N] {
    const TRIVIALLY_COPYABLE: bool = T::TRIVIALLY_COPYABLE;
}

macro_rules! tuple_element {
    ($($name:ident),+) => {
        // SAFETY: a tuple is trivially copyable exactly when every
        // component is.
        unsafe impl<$($name: Element),+> Element for ($($name,)+) {
            const TRIVIALLY_COPYABLE: bool = true $(&& $name::TRIVIALLY_COPYABLE)+;
        }
    };
}

tuple_element!(A);
tuple_element!(A, B);
tuple_element!(A, B, C);
tuple_element!(A, B, C, D);

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::Element;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;

    element!(String);

    // SAFETY: owning containers; duplication always goes through `Clone`.
    unsafe impl<T: Clone> Element for Vec<T> {
        const TRIVIALLY_COPYABLE: bool = false;
    }

    // SAFETY: see above.
    unsafe impl<T: Clone> Element for Box<T> {
        const TRIVIALLY_COPYABLE: bool = false;
    }

    // SAFETY: reference counts must be bumped by `Clone`.
    unsafe impl<T: ?Sized> Element for Rc<T> {
        const TRIVIALLY_COPYABLE: bool = false;
    }

    // SAFETY: see above.
    #[cfg(target_has_atomic = "ptr")]
    unsafe impl<T: ?Sized> Element for alloc::sync::Arc<T> {
        const TRIVIALLY_COPYABLE: bool = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Point {
        _x: i32,
        _y: i32,
    }

    #[derive(Clone)]
    struct Label {
        _text: std::string::String,
    }

    trivially_copyable!(Point);
    element!(Label);

    #[test]
    fn scalars_are_trivial() {
        assert!(is_trivially_copyable::<u8>());
        assert!(is_trivially_copyable::<i128>());
        assert!(is_trivially_copyable::<f64>());
        assert!(is_trivially_copyable::<char>());
        assert!(is_trivially_copyable::<()>());
    }

    #[test]
    fn pointers_and_references_are_trivial() {
        assert!(is_trivially_copyable::<&str>());
        assert!(is_trivially_copyable::<*const u8>());
        assert!(is_trivially_copyable::<*mut [u32]>());
        assert!(is_trivially_copyable::<NonNull<u64>>());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owning_types_are_not_trivial() {
        assert!(!is_trivially_copyable::<std::string::String>());
        assert!(!is_trivially_copyable::<std::vec::Vec<u8>>());
        assert!(!is_trivially_copyable::<std::boxed::Box<u8>>());
        assert!(!is_trivially_copyable::<std::rc::Rc<str>>());
        assert!(!is_trivially_copyable::<std::sync::Arc<[u8]>>());
    }

    #[test]
    fn composites_follow_their_components() {
        assert!(is_trivially_copyable::<Option<u32>>());
        assert!(!is_trivially_copyable::<Option<Label>>());
        assert!(is_trivially_copyable::<[u16; 8]>());
        assert!(!is_trivially_copyable::<[Label; 2]>());
        assert!(is_trivially_copyable::<(u8, f32, char)>());
        assert!(!is_trivially_copyable::<(u8, Label)>());
        assert!(is_trivially_copyable::<(Point, Option<Point>)>());
    }

    #[test]
    fn macro_declared_types() {
        assert!(is_trivially_copyable::<Point>());
        assert!(!is_trivially_copyable::<Label>());
    }

    #[test]
    fn oracle_is_usable_in_const_context() {
        const TRIVIAL: bool = is_trivially_copyable::<[Point; 3]>();
        assert!(TRIVIAL);
    }
}
