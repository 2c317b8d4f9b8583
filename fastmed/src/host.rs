//! Host array gateway
//!
//! A host environment passes arrays around as a class tag, a shape, and a
//! block of element bytes. This module provides an owned form of such an
//! array and the host-facing entry point that validates the argument list
//! before handing the single matrix to a [`MedianEngine`].

use bytemuck::allocation::pod_collect_to_vec;
use fastmed_core::{
    validate_buffer_len, validate_shape, ArgumentError, ClassId, MedianElement, MedianError,
    MedianVector, RawMatrix, Result,
};
use log::debug;

use crate::{MedianConfig, MedianEngine};

/// Owned host array in column-major order with native-endian element bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostArray {
    class: ClassId,
    complex: bool,
    nrows: usize,
    ncols: usize,
    data: Vec<u8>,
}

impl HostArray {
    /// Wrap raw element bytes without checking them against the shape
    ///
    /// Mismatches surface as `InvalidArgument` when the array is used.
    pub fn from_bytes(class: ClassId, nrows: usize, ncols: usize, data: Vec<u8>) -> Self {
        Self {
            class,
            complex: false,
            nrows,
            ncols,
            data,
        }
    }

    /// Copy typed column-major values into a host array
    pub fn from_slice<T: MedianElement>(nrows: usize, ncols: usize, values: &[T]) -> Self {
        Self::from_bytes(
            T::class_id(),
            nrows,
            ncols,
            bytemuck::cast_slice(values).to_vec(),
        )
    }

    /// Build an array of `class` from f64 values, converting each one
    ///
    /// Integer classes saturate out-of-range values and truncate fractions.
    /// The 64-bit integer classes are accepted so they can be represented,
    /// even though the median routine rejects them.
    pub fn from_f64s(class: ClassId, nrows: usize, ncols: usize, values: &[f64]) -> Result<Self> {
        let Some(element_size) = class.element_size() else {
            return Err(ArgumentError::NotNumeric(class).into());
        };
        let count = validate_shape(nrows, ncols)?;
        validate_buffer_len(values.len() * element_size, count, element_size)?;

        let array = match class {
            ClassId::Double => Self::from_slice(nrows, ncols, values),
            ClassId::Single => Self::from_slice(nrows, ncols, &narrow::<f32>(values)),
            ClassId::Int8 => Self::from_slice(nrows, ncols, &narrow::<i8>(values)),
            ClassId::Uint8 => Self::from_slice(nrows, ncols, &narrow::<u8>(values)),
            ClassId::Int16 => Self::from_slice(nrows, ncols, &narrow::<i16>(values)),
            ClassId::Uint16 => Self::from_slice(nrows, ncols, &narrow::<u16>(values)),
            ClassId::Int32 => Self::from_slice(nrows, ncols, &narrow::<i32>(values)),
            ClassId::Uint32 => Self::from_slice(nrows, ncols, &narrow::<u32>(values)),
            ClassId::Int64 => {
                let wide: Vec<i64> = values.iter().map(|&v| v as i64).collect();
                Self::from_bytes(class, nrows, ncols, bytemuck::cast_slice(&wide).to_vec())
            }
            ClassId::Uint64 => {
                let wide: Vec<u64> = values.iter().map(|&v| v as u64).collect();
                Self::from_bytes(class, nrows, ncols, bytemuck::cast_slice(&wide).to_vec())
            }
            _ => return Err(ArgumentError::NotNumeric(class).into()),
        };

        Ok(array)
    }

    /// Wrap a median vector as a `1 x ncols` host array
    pub fn from_medians(medians: MedianVector) -> Self {
        Self::from_bytes(
            medians.class_id(),
            1,
            medians.len(),
            medians.as_bytes().to_vec(),
        )
    }

    /// Mark the array as complex
    pub fn with_complex(mut self, complex: bool) -> Self {
        self.complex = complex;
        self
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn is_complex(&self) -> bool {
        self.complex
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the array for the dispatcher
    pub fn as_raw(&self) -> RawMatrix<'_> {
        RawMatrix::new(self.class, self.nrows, self.ncols, &self.data).with_complex(self.complex)
    }

    /// Copy the elements out as `T`, if `T` matches the array's class
    pub fn to_vec<T: MedianElement>(&self) -> Option<Vec<T>> {
        if T::class_id() != self.class || self.complex {
            return None;
        }
        if self.data.len() % T::size_bytes() != 0 {
            return None;
        }
        Some(pod_collect_to_vec(self.data.as_slice()))
    }

    /// Widen the elements to f64, for classes the median routine supports
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        match self.class {
            ClassId::Double => self.to_vec::<f64>(),
            ClassId::Single => self.to_vec::<f32>().map(|v| widen(&v)),
            ClassId::Int8 => self.to_vec::<i8>().map(|v| widen(&v)),
            ClassId::Uint8 => self.to_vec::<u8>().map(|v| widen(&v)),
            ClassId::Int16 => self.to_vec::<i16>().map(|v| widen(&v)),
            ClassId::Uint16 => self.to_vec::<u16>().map(|v| widen(&v)),
            ClassId::Int32 => self.to_vec::<i32>().map(|v| widen(&v)),
            ClassId::Uint32 => self.to_vec::<u32>().map(|v| widen(&v)),
            _ => None,
        }
    }
}

fn narrow<T: MedianElement>(values: &[f64]) -> Vec<T> {
    values.iter().map(|&v| T::from_f64(v)).collect()
}

fn widen<T: MedianElement>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.to_f64()).collect()
}

/// Column medians of the single matrix in `args`, with default settings
///
/// See [`fast_median_with`].
pub fn fast_median(args: &[HostArray]) -> Result<HostArray> {
    fast_median_with(&MedianConfig::default(), args)
}

/// Column medians of the single matrix in `args`
///
/// Returns a `1 x ncols` array of the input's class, or of class `double`
/// when `config.promote` is set. Fails with `InvalidArgument` unless `args`
/// holds exactly one numeric, non-empty, well-formed matrix, and with
/// `UnsupportedType` for complex or 64-bit integer input. The input is never
/// modified.
pub fn fast_median_with(config: &MedianConfig, args: &[HostArray]) -> Result<HostArray> {
    let [input] = args else {
        return Err(MedianError::InvalidArgument(ArgumentError::Arity {
            given: args.len(),
        }));
    };

    let raw = input.as_raw();
    raw.check_numeric()?;

    let engine = MedianEngine::new(config.clone());
    let output = if config.promote {
        let medians = engine.compute_f64(&raw)?;
        HostArray::from_slice(1, medians.len(), &medians)
    } else {
        HostArray::from_medians(engine.compute(&raw)?)
    };

    debug!(
        "Produced {}x{} {} median array",
        output.nrows, output.ncols, output.class
    );
    Ok(output)
}
