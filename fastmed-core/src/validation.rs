//! Shape and buffer validation for column-major matrices
//!
//! Pure checks with overflow protection, run before any working copy is
//! allocated.

use crate::{ArgumentError, MedianError};

/// Validate matrix dimensions and return the element count
///
/// Both dimensions must be non-zero, and their product must be addressable.
pub const fn validate_shape(nrows: usize, ncols: usize) -> Result<usize, MedianError> {
    if nrows == 0 || ncols == 0 {
        return Err(MedianError::InvalidArgument(ArgumentError::EmptyMatrix {
            nrows,
            ncols,
        }));
    }

    // Conservative bound, mirrors the largest allocation a slice may describe
    match nrows.checked_mul(ncols) {
        Some(count) if count <= isize::MAX as usize => Ok(count),
        _ => Err(MedianError::InvalidArgument(ArgumentError::DimensionOverflow)),
    }
}

/// Validate that `byte_len` holds exactly `count` elements of `element_size`
pub const fn validate_buffer_len(
    byte_len: usize,
    count: usize,
    element_size: usize,
) -> Result<(), MedianError> {
    let expected = match count.checked_mul(element_size) {
        Some(expected) => expected,
        None => return Err(MedianError::InvalidArgument(ArgumentError::DimensionOverflow)),
    };

    if byte_len != expected {
        return Err(MedianError::InvalidArgument(ArgumentError::BufferLength {
            expected,
            actual: byte_len,
        }));
    }

    Ok(())
}
