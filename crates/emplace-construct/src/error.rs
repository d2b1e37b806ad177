//! Construction error types.

use core::error::Error;
use core::fmt;

/// Errors reported by the checked construction helpers.
///
/// The unchecked primitives never return these; see the crate docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructError {
    /// `count × size_of::<T>()` does not fit in `isize`, the largest byte
    /// distance a pointer offset can represent.
    LengthOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of one element in bytes.
        elem_size: usize,
    },
    /// The destination has fewer slots than the source has elements.
    CapacityExceeded {
        /// Number of elements to construct.
        requested: usize,
        /// Number of destination slots available.
        capacity: usize,
    },
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOverflow { count, elem_size } => {
                write!(
                    f,
                    "byte length overflow: {count} elements of {elem_size} bytes exceed isize::MAX"
                )
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "destination capacity exceeded: requested {requested} slots, capacity {capacity}"
                )
            }
        }
    }
}

impl Error for ConstructError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_quantities() {
        let overflow = ConstructError::LengthOverflow {
            count: 7,
            elem_size: 16,
        };
        assert_eq!(
            overflow.to_string(),
            "byte length overflow: 7 elements of 16 bytes exceed isize::MAX"
        );

        let capacity = ConstructError::CapacityExceeded {
            requested: 5,
            capacity: 3,
        };
        assert_eq!(
            capacity.to_string(),
            "destination capacity exceeded: requested 5 slots, capacity 3"
        );
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConstructError::CapacityExceeded {
            requested: 1,
            capacity: 0,
        });
        assert!(err.source().is_none());
    }
}
