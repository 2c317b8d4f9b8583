//! Element type constraints for median selection
//!
//! One implementation exists per supported host class. The trait carries
//! everything the generic algorithm needs from a concrete numeric type: its
//! class tag, a total order, and the even-length averaging rule.

use core::cmp::Ordering;

use bytemuck::Pod;

use crate::{ClassId, IntegerRounding};

/// Trait for types that can be stored in a matrix handed to the median routine
///
/// Elements must be plain data (so a working copy can be made from raw host
/// bytes) and shareable across threads (so columns can be processed in
/// parallel).
pub trait MedianElement: Pod + PartialOrd + Send + Sync + core::fmt::Debug {
    /// Host class tag for this element type
    fn class_id() -> ClassId;

    /// Size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Total order used for selection
    ///
    /// Integers use their natural order. Floats use IEEE 754 `totalOrder`,
    /// which places negative NaN below `-inf` and positive NaN above `+inf`.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Average of the two middle elements of an even-length column
    ///
    /// `lower <= upper` holds for every call made by the combiner.
    fn mean_of_middles(lower: Self, upper: Self, rounding: IntegerRounding) -> Self;

    /// Convert from f64, saturating for integer types
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;
}

impl MedianElement for f64 {
    fn class_id() -> ClassId {
        ClassId::Double
    }

    fn total_order(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn mean_of_middles(lower: Self, upper: Self, _rounding: IntegerRounding) -> Self {
        // Halving first keeps two large finite values from overflowing.
        0.5 * upper + 0.5 * lower
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MedianElement for f32 {
    fn class_id() -> ClassId {
        ClassId::Single
    }

    fn total_order(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn mean_of_middles(lower: Self, upper: Self, _rounding: IntegerRounding) -> Self {
        (0.5 * f64::from(upper) + 0.5 * f64::from(lower)) as f32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty => $class:ident),* $(,)?) => {
        $(
            impl MedianElement for $ty {
                fn class_id() -> ClassId {
                    ClassId::$class
                }

                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn mean_of_middles(lower: Self, upper: Self, rounding: IntegerRounding) -> Self {
                    // The sum of two 32-bit values is exact in i64 and the
                    // halved result lies between them, so the cast is lossless.
                    rounding.halve(i64::from(lower) + i64::from(upper)) as $ty
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_integer_element!(
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
);
