//! Median value of a partially ordered column
//!
//! After [`select_median`] the element at `len / 2` is in its sorted place
//! and everything below it is no larger. An odd-length column's median is
//! read straight off that position. An even-length column also needs the
//! lower middle element, which is the maximum of the lower half and costs
//! one linear scan.

use crate::{select_median, MedianElement};

/// How integer classes halve the sum of the two middle elements
///
/// Integer medians keep the input class, so an odd sum cannot be stored
/// exactly. Float classes ignore this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IntegerRounding {
    /// Truncate toward zero (`2.5 -> 2`, `-2.5 -> -2`), as a C cast does
    #[default]
    TowardZero,
    /// Round to nearest, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`)
    NearestTiesAway,
}

impl IntegerRounding {
    /// Halve an exact sum according to this rounding mode
    pub const fn halve(self, sum: i64) -> i64 {
        match self {
            IntegerRounding::NearestTiesAway => (sum + sum.signum()) / 2,
            IntegerRounding::TowardZero => sum / 2,
        }
    }
}

/// Largest element of the lower half of a selected column
pub fn lower_half_max<T: MedianElement>(lower: &[T]) -> Option<T> {
    lower.iter().copied().max_by(T::total_order)
}

/// Median of a column already reordered by [`select_median`]
///
/// # Panics
///
/// Panics if `column` is empty.
pub fn combine_column<T: MedianElement>(column: &[T], rounding: IntegerRounding) -> T {
    let half = column.len() / 2;
    let upper = column[half];

    if half * 2 != column.len() {
        return upper;
    }

    match lower_half_max(&column[..half]) {
        Some(lower) => T::mean_of_middles(lower, upper, rounding),
        None => upper,
    }
}

/// Median of a selected column, promoted to f64 so even-length integer
/// columns keep their fractional part
///
/// # Panics
///
/// Panics if `column` is empty.
pub fn combine_column_f64<T: MedianElement>(column: &[T]) -> f64 {
    let half = column.len() / 2;
    let upper = column[half].to_f64();

    if half * 2 != column.len() {
        return upper;
    }

    match lower_half_max(&column[..half]) {
        Some(lower) => 0.5 * upper + 0.5 * lower.to_f64(),
        None => upper,
    }
}

/// Select and combine in one step
pub fn median_of_column<T: MedianElement>(column: &mut [T], rounding: IntegerRounding) -> T {
    select_median(column);
    combine_column(column, rounding)
}

pub fn median_of_column_f64<T: MedianElement>(column: &mut [T]) -> f64 {
    select_median(column);
    combine_column_f64(column)
}
