//! Overflow-safe length computation shared by the strategies.

use core::mem;

use crate::error::ConstructError;

/// Byte length of `count` elements of `T`.
///
/// Succeeds when the product fits in `isize::MAX`, the bound every pointer
/// offset and every block copy requires. Zero-sized types always succeed
/// with `0`.
///
/// # Errors
///
/// [`ConstructError::LengthOverflow`] if the product exceeds `isize::MAX`.
///
/// ```
/// use emplace_construct::{byte_len, ConstructError};
///
/// assert_eq!(byte_len::<u32>(5), Ok(20));
/// assert_eq!(
///     byte_len::<u64>(usize::MAX / 4),
///     Err(ConstructError::LengthOverflow { count: usize::MAX / 4, elem_size: 8 }),
/// );
/// ```
#[inline]
pub const fn byte_len<T>(count: usize) -> Result<usize, ConstructError> {
    let elem_size = mem::size_of::<T>();
    match count.checked_mul(elem_size) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(bytes),
        _ => Err(ConstructError::LengthOverflow { count, elem_size }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_counts_multiply() {
        assert_eq!(byte_len::<u8>(0), Ok(0));
        assert_eq!(byte_len::<u16>(3), Ok(6));
        assert_eq!(byte_len::<[u64; 4]>(2), Ok(64));
    }

    #[test]
    fn zero_sized_types_never_overflow() {
        assert_eq!(byte_len::<()>(usize::MAX), Ok(0));
    }

    #[test]
    fn isize_max_is_the_inclusive_limit() {
        let limit = isize::MAX as usize;
        assert_eq!(byte_len::<u8>(limit), Ok(limit));
        assert_eq!(
            byte_len::<u8>(limit + 1),
            Err(ConstructError::LengthOverflow {
                count: limit + 1,
                elem_size: 1,
            })
        );
    }

    #[test]
    fn usize_wraparound_is_reported() {
        assert!(matches!(
            byte_len::<u32>(usize::MAX),
            Err(ConstructError::LengthOverflow { elem_size: 4, .. })
        ));
    }

    proptest! {
        #[test]
        fn agrees_with_wide_multiplication(count in any::<usize>()) {
            let wide = count as u128 * 8;
            let expected = if wide <= isize::MAX as u128 {
                Ok(wide as usize)
            } else {
                Err(ConstructError::LengthOverflow { count, elem_size: 8 })
            };
            prop_assert_eq!(byte_len::<u64>(count), expected);
        }
    }
}
