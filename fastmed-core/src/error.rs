//! Error types for median operations

use crate::ClassId;

/// Reasons an argument is rejected before any computation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// The routine takes exactly one matrix
    Arity { given: usize },
    /// The class holds no real numbers (logical, char, cell, ...)
    NotNumeric(ClassId),
    /// A matrix with no rows or no columns has no medians
    EmptyMatrix { nrows: usize, ncols: usize },
    /// Data length in bytes does not match the declared shape
    BufferLength { expected: usize, actual: usize },
    /// `nrows * ncols` does not fit in memory
    DimensionOverflow,
}

/// Errors that can occur while computing column medians
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianError {
    /// Bad arity, non-numeric input, or a malformed matrix
    InvalidArgument(ArgumentError),
    /// Numeric input whose element type has no instantiation
    UnsupportedType { class: ClassId, complex: bool },
}

/// Coarse classification of a [`MedianError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    UnsupportedType,
}

impl MedianError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MedianError::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            MedianError::UnsupportedType { .. } => ErrorCategory::UnsupportedType,
        }
    }

    /// Identifier reported to the host alongside the message
    pub const fn identifier(&self) -> &'static str {
        match self {
            MedianError::InvalidArgument(ArgumentError::Arity { .. }) => "fast_median:nrhs",
            MedianError::InvalidArgument(_) => "fast_median:prhs",
            MedianError::UnsupportedType { .. } => "Numerical:fast_median:prhs",
        }
    }
}

impl From<ArgumentError> for MedianError {
    fn from(err: ArgumentError) -> Self {
        MedianError::InvalidArgument(err)
    }
}

impl core::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgumentError::Arity { given } => write!(
                f,
                "Expected exactly one argument, the matrix of columns, but got {given}"
            ),
            ArgumentError::NotNumeric(class) => write!(
                f,
                "Input argument must be a numeric matrix, got a {class} array"
            ),
            ArgumentError::EmptyMatrix { nrows, ncols } => write!(
                f,
                "Input matrix must have at least one row and one column, got {nrows}x{ncols}"
            ),
            ArgumentError::BufferLength { expected, actual } => write!(
                f,
                "Matrix data is {actual} bytes but its shape requires {expected}"
            ),
            ArgumentError::DimensionOverflow => write!(f, "Matrix dimensions overflow"),
        }
    }
}

impl core::fmt::Display for MedianError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MedianError::InvalidArgument(err) => write!(f, "{err}"),
            MedianError::UnsupportedType {
                class,
                complex: true,
            } => write!(f, "Unrecognized numeric array type: complex {class}"),
            MedianError::UnsupportedType { class, .. } => {
                write!(f, "Unrecognized numeric array type: {class}")
            }
        }
    }
}

impl core::error::Error for ArgumentError {}

impl core::error::Error for MedianError {}

/// Result type for median operations
pub type Result<T> = core::result::Result<T, MedianError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        let arity = MedianError::from(ArgumentError::Arity { given: 0 });
        assert_eq!(arity.identifier(), "fast_median:nrhs");
        assert_eq!(arity.category(), ErrorCategory::InvalidArgument);

        let not_numeric = MedianError::from(ArgumentError::NotNumeric(ClassId::Char));
        assert_eq!(not_numeric.identifier(), "fast_median:prhs");

        let unsupported = MedianError::UnsupportedType {
            class: ClassId::Int64,
            complex: false,
        };
        assert_eq!(unsupported.identifier(), "Numerical:fast_median:prhs");
        assert_eq!(unsupported.category(), ErrorCategory::UnsupportedType);
    }

    #[test]
    fn test_messages() {
        let err = MedianError::UnsupportedType {
            class: ClassId::Uint64,
            complex: false,
        };
        assert_eq!(err.to_string(), "Unrecognized numeric array type: uint64");

        let err = MedianError::UnsupportedType {
            class: ClassId::Double,
            complex: true,
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized numeric array type: complex double"
        );

        let err = MedianError::from(ArgumentError::NotNumeric(ClassId::Logical));
        assert_eq!(
            err.to_string(),
            "Input argument must be a numeric matrix, got a logical array"
        );
    }
}
