//! Runtime type dispatch for column medians
//!
//! Host arrays arrive as a class tag plus raw bytes. The dispatcher checks
//! the tag, makes a private typed working copy of the bytes, and runs the
//! generic selection and combining steps over it through a [`ColumnKernel`].
//! The caller's buffer is only ever read.

use alloc::vec::Vec;

use bytemuck::allocation::pod_collect_to_vec;

use crate::{
    median_of_column, median_of_column_f64, validate_buffer_len, validate_shape, ArgumentError,
    ClassId, ColumnKernel, IntegerRounding, MedianElement, MedianError, Result,
};

/// Borrowed view of a host matrix
///
/// `data` holds `nrows * ncols` elements of `class` in native byte order,
/// column-major. It does not need to be aligned for the element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMatrix<'a> {
    pub class: ClassId,
    pub complex: bool,
    pub nrows: usize,
    pub ncols: usize,
    pub data: &'a [u8],
}

impl<'a> RawMatrix<'a> {
    /// Create a view of real-valued host data
    pub const fn new(class: ClassId, nrows: usize, ncols: usize, data: &'a [u8]) -> Self {
        Self {
            class,
            complex: false,
            nrows,
            ncols,
            data,
        }
    }

    /// Mark the data as complex
    pub const fn with_complex(mut self, complex: bool) -> Self {
        self.complex = complex;
        self
    }

    /// Reject classes that hold no real numbers
    pub const fn check_numeric(&self) -> Result<()> {
        if !self.class.is_numeric() {
            return Err(MedianError::InvalidArgument(ArgumentError::NotNumeric(
                self.class,
            )));
        }
        Ok(())
    }

    /// Validate the shape and copy the bytes into an owned typed buffer
    fn working_copy<T: MedianElement>(&self) -> Result<Vec<T>> {
        let count = validate_shape(self.nrows, self.ncols)?;
        validate_buffer_len(self.data.len(), count, T::size_bytes())?;
        Ok(pod_collect_to_vec(self.data))
    }

    const fn unsupported(&self) -> MedianError {
        MedianError::UnsupportedType {
            class: self.class,
            complex: self.complex,
        }
    }
}

/// One median per column, in the element type of the input
#[derive(Debug, Clone, PartialEq)]
pub enum MedianVector {
    Double(Vec<f64>),
    Single(Vec<f32>),
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
}

impl MedianVector {
    pub fn class_id(&self) -> ClassId {
        match self {
            MedianVector::Double(_) => ClassId::Double,
            MedianVector::Single(_) => ClassId::Single,
            MedianVector::Int8(_) => ClassId::Int8,
            MedianVector::Uint8(_) => ClassId::Uint8,
            MedianVector::Int16(_) => ClassId::Int16,
            MedianVector::Uint16(_) => ClassId::Uint16,
            MedianVector::Int32(_) => ClassId::Int32,
            MedianVector::Uint32(_) => ClassId::Uint32,
        }
    }

    /// Number of medians, equal to the input's column count
    pub fn len(&self) -> usize {
        match self {
            MedianVector::Double(v) => v.len(),
            MedianVector::Single(v) => v.len(),
            MedianVector::Int8(v) => v.len(),
            MedianVector::Uint8(v) => v.len(),
            MedianVector::Int16(v) => v.len(),
            MedianVector::Uint16(v) => v.len(),
            MedianVector::Int32(v) => v.len(),
            MedianVector::Uint32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen every median to f64
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            MedianVector::Double(v) => v.clone(),
            MedianVector::Single(v) => widen(v),
            MedianVector::Int8(v) => widen(v),
            MedianVector::Uint8(v) => widen(v),
            MedianVector::Int16(v) => widen(v),
            MedianVector::Uint16(v) => widen(v),
            MedianVector::Int32(v) => widen(v),
            MedianVector::Uint32(v) => widen(v),
        }
    }

    /// Medians as native-endian bytes, ready to hand back to a host array
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MedianVector::Double(v) => bytemuck::cast_slice(v),
            MedianVector::Single(v) => bytemuck::cast_slice(v),
            MedianVector::Int8(v) => bytemuck::cast_slice(v),
            MedianVector::Uint8(v) => v.as_slice(),
            MedianVector::Int16(v) => bytemuck::cast_slice(v),
            MedianVector::Uint16(v) => bytemuck::cast_slice(v),
            MedianVector::Int32(v) => bytemuck::cast_slice(v),
            MedianVector::Uint32(v) => bytemuck::cast_slice(v),
        }
    }
}

fn widen<T: MedianElement>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.to_f64()).collect()
}

fn native_medians<T, K>(
    matrix: &RawMatrix<'_>,
    kernel: &K,
    rounding: IntegerRounding,
) -> Result<Vec<T>>
where
    T: MedianElement,
    K: ColumnKernel,
{
    let mut working = matrix.working_copy::<T>()?;
    Ok(kernel.map_columns(&mut working, matrix.nrows, |column| {
        median_of_column(column, rounding)
    }))
}

fn promoted_medians<T, K>(matrix: &RawMatrix<'_>, kernel: &K) -> Result<Vec<f64>>
where
    T: MedianElement,
    K: ColumnKernel,
{
    let mut working = matrix.working_copy::<T>()?;
    Ok(kernel.map_columns(&mut working, matrix.nrows, median_of_column_f64))
}

/// Compute the median of every column of a host matrix
///
/// The result has the input's class. Non-numeric classes fail with
/// `InvalidArgument`; complex data and numeric classes without an
/// instantiation fail with `UnsupportedType`. All checks run before the
/// working copy is made.
pub fn run_fast_median<K: ColumnKernel>(
    matrix: &RawMatrix<'_>,
    kernel: &K,
    rounding: IntegerRounding,
) -> Result<MedianVector> {
    matrix.check_numeric()?;
    if matrix.complex || !matrix.class.is_supported() {
        return Err(matrix.unsupported());
    }

    let medians = match matrix.class {
        ClassId::Double => MedianVector::Double(native_medians(matrix, kernel, rounding)?),
        ClassId::Single => MedianVector::Single(native_medians(matrix, kernel, rounding)?),
        ClassId::Int8 => MedianVector::Int8(native_medians(matrix, kernel, rounding)?),
        ClassId::Uint8 => MedianVector::Uint8(native_medians(matrix, kernel, rounding)?),
        ClassId::Int16 => MedianVector::Int16(native_medians(matrix, kernel, rounding)?),
        ClassId::Uint16 => MedianVector::Uint16(native_medians(matrix, kernel, rounding)?),
        ClassId::Int32 => MedianVector::Int32(native_medians(matrix, kernel, rounding)?),
        ClassId::Uint32 => MedianVector::Uint32(native_medians(matrix, kernel, rounding)?),
        _ => return Err(matrix.unsupported()),
    };

    Ok(medians)
}

/// Like [`run_fast_median`], but every median is returned as f64
pub fn run_fast_median_f64<K: ColumnKernel>(matrix: &RawMatrix<'_>, kernel: &K) -> Result<Vec<f64>> {
    matrix.check_numeric()?;
    if matrix.complex || !matrix.class.is_supported() {
        return Err(matrix.unsupported());
    }

    match matrix.class {
        ClassId::Double => promoted_medians::<f64, K>(matrix, kernel),
        ClassId::Single => promoted_medians::<f32, K>(matrix, kernel),
        ClassId::Int8 => promoted_medians::<i8, K>(matrix, kernel),
        ClassId::Uint8 => promoted_medians::<u8, K>(matrix, kernel),
        ClassId::Int16 => promoted_medians::<i16, K>(matrix, kernel),
        ClassId::Uint16 => promoted_medians::<u16, K>(matrix, kernel),
        ClassId::Int32 => promoted_medians::<i32, K>(matrix, kernel),
        ClassId::Uint32 => promoted_medians::<u32, K>(matrix, kernel),
        _ => Err(matrix.unsupported()),
    }
}

fn typed_working_copy<T: MedianElement>(data: &[T], nrows: usize, ncols: usize) -> Result<Vec<T>> {
    let count = validate_shape(nrows, ncols)?;
    validate_buffer_len(core::mem::size_of_val(data), count, T::size_bytes())?;
    Ok(data.to_vec())
}

/// Column medians of an already typed column-major buffer
///
/// `data` is copied before selection and left untouched.
pub fn column_medians<T, K>(
    data: &[T],
    nrows: usize,
    ncols: usize,
    kernel: &K,
    rounding: IntegerRounding,
) -> Result<Vec<T>>
where
    T: MedianElement,
    K: ColumnKernel,
{
    let mut working = typed_working_copy(data, nrows, ncols)?;
    Ok(kernel.map_columns(&mut working, nrows, |column| {
        median_of_column(column, rounding)
    }))
}

pub fn column_medians_f64<T, K>(data: &[T], nrows: usize, ncols: usize, kernel: &K) -> Result<Vec<f64>>
where
    T: MedianElement,
    K: ColumnKernel,
{
    let mut working = typed_working_copy(data, nrows, ncols)?;
    Ok(kernel.map_columns(&mut working, nrows, median_of_column_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Serial;

    fn bytes_of<T: bytemuck::Pod>(values: &[T]) -> Vec<u8> {
        bytemuck::cast_slice(values).to_vec()
    }

    #[test]
    fn test_double_matrix() {
        // columns [3, 1, 2] and [6, 5, 4]
        let bytes = bytes_of(&[3.0f64, 1.0, 2.0, 6.0, 5.0, 4.0]);
        let matrix = RawMatrix::new(ClassId::Double, 3, 2, &bytes);
        let medians = run_fast_median(&matrix, &Serial, IntegerRounding::default()).unwrap();
        assert_eq!(medians, MedianVector::Double(vec![2.0, 5.0]));
        assert_eq!(medians.class_id(), ClassId::Double);
    }

    #[test]
    fn test_even_column_double() {
        let bytes = bytes_of(&[4.0f64, 1.0, 3.0, 2.0]);
        let matrix = RawMatrix::new(ClassId::Double, 4, 1, &bytes);
        let medians = run_fast_median(&matrix, &Serial, IntegerRounding::default()).unwrap();
        assert_eq!(medians, MedianVector::Double(vec![2.5]));
    }

    #[test]
    fn test_input_bytes_untouched() {
        let bytes = bytes_of(&[9i32, 8, 7, 6, 5, 4, 3, 2, 1]);
        let snapshot = bytes.clone();
        let matrix = RawMatrix::new(ClassId::Int32, 3, 3, &bytes);
        let medians = run_fast_median(&matrix, &Serial, IntegerRounding::default()).unwrap();
        assert_eq!(medians, MedianVector::Int32(vec![8, 5, 2]));
        assert_eq!(bytes, snapshot);
    }

    #[test]
    fn test_unaligned_bytes() {
        let mut buffer = vec![0u8];
        buffer.extend_from_slice(&bytes_of(&[1.0f32, 7.0, 3.0]));
        let matrix = RawMatrix::new(ClassId::Single, 3, 1, &buffer[1..]);
        let medians = run_fast_median(&matrix, &Serial, IntegerRounding::default()).unwrap();
        assert_eq!(medians, MedianVector::Single(vec![3.0]));
    }

    #[test]
    fn test_every_supported_class() {
        let values = [4u8, 1, 3, 2];
        let rounding = IntegerRounding::TowardZero;

        for class in ClassId::SUPPORTED {
            let bytes = match class {
                ClassId::Double => bytes_of(&values.map(f64::from)),
                ClassId::Single => bytes_of(&values.map(f32::from)),
                ClassId::Int8 => bytes_of(&values.map(|v| v as i8)),
                ClassId::Uint8 => bytes_of(&values),
                ClassId::Int16 => bytes_of(&values.map(i16::from)),
                ClassId::Uint16 => bytes_of(&values.map(u16::from)),
                ClassId::Int32 => bytes_of(&values.map(i32::from)),
                ClassId::Uint32 => bytes_of(&values.map(u32::from)),
                _ => unreachable!(),
            };
            let matrix = RawMatrix::new(class, 4, 1, &bytes);

            let medians = run_fast_median(&matrix, &Serial, rounding).unwrap();
            assert_eq!(medians.class_id(), class);
            assert_eq!(medians.len(), 1);
            let expected = if class.is_integer() { 2.0 } else { 2.5 };
            assert_eq!(medians.to_f64_vec(), vec![expected]);

            assert_eq!(run_fast_median_f64(&matrix, &Serial).unwrap(), vec![2.5]);
        }
    }

    #[test]
    fn test_unsupported_class() {
        let bytes = bytes_of(&[1i64, 2, 3]);
        let matrix = RawMatrix::new(ClassId::Int64, 3, 1, &bytes);
        assert_eq!(
            run_fast_median(&matrix, &Serial, IntegerRounding::default()),
            Err(MedianError::UnsupportedType {
                class: ClassId::Int64,
                complex: false
            })
        );
        assert!(run_fast_median_f64(&matrix, &Serial).is_err());
    }

    #[test]
    fn test_complex_is_unsupported() {
        let bytes = bytes_of(&[1.0f64, 0.0]);
        let matrix = RawMatrix::new(ClassId::Double, 1, 1, &bytes).with_complex(true);
        assert_eq!(
            run_fast_median(&matrix, &Serial, IntegerRounding::default()),
            Err(MedianError::UnsupportedType {
                class: ClassId::Double,
                complex: true
            })
        );
    }

    #[test]
    fn test_non_numeric_is_invalid_argument() {
        let bytes = [1u8, 0, 1];
        let matrix = RawMatrix::new(ClassId::Logical, 3, 1, &bytes);
        assert_eq!(
            run_fast_median(&matrix, &Serial, IntegerRounding::default()),
            Err(MedianError::InvalidArgument(ArgumentError::NotNumeric(
                ClassId::Logical
            )))
        );
    }

    #[test]
    fn test_unsupported_checked_before_shape() {
        let matrix = RawMatrix::new(ClassId::Uint64, 0, 0, &[]);
        assert_eq!(
            run_fast_median(&matrix, &Serial, IntegerRounding::default()),
            Err(MedianError::UnsupportedType {
                class: ClassId::Uint64,
                complex: false
            })
        );
    }

    #[test]
    fn test_empty_and_mismatched_shapes() {
        let matrix = RawMatrix::new(ClassId::Double, 0, 3, &[]);
        assert_eq!(
            run_fast_median(&matrix, &Serial, IntegerRounding::default()),
            Err(MedianError::InvalidArgument(ArgumentError::EmptyMatrix {
                nrows: 0,
                ncols: 3
            }))
        );

        let bytes = bytes_of(&[1.0f64, 2.0, 3.0]);
        let matrix = RawMatrix::new(ClassId::Double, 2, 2, &bytes);
        assert_eq!(
            run_fast_median(&matrix, &Serial, IntegerRounding::default()),
            Err(MedianError::InvalidArgument(ArgumentError::BufferLength {
                expected: 32,
                actual: 24
            }))
        );
    }

    #[test]
    fn test_typed_column_medians() {
        let data = [3u16, 1, 2, 4, 1, 3, 2, 9];
        let medians =
            column_medians(&data, 4, 2, &Serial, IntegerRounding::NearestTiesAway).unwrap();
        assert_eq!(medians, vec![3, 3]);
        assert_eq!(column_medians_f64(&data, 4, 2, &Serial).unwrap(), vec![2.5, 2.5]);
        assert_eq!(data, [3, 1, 2, 4, 1, 3, 2, 9]);

        assert!(column_medians(&data, 3, 2, &Serial, IntegerRounding::default()).is_err());
    }

    #[test]
    fn test_as_bytes_round_trip() {
        let medians = MedianVector::Int16(vec![-2, 7]);
        let restored: Vec<i16> = pod_collect_to_vec(medians.as_bytes());
        assert_eq!(restored, vec![-2, 7]);
        assert!(!medians.is_empty());
    }
}
