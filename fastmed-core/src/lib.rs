#![cfg_attr(not(test), no_std)]

//! fastmed core - column-wise median selection
//!
//! This crate provides the parts of the column median routine that need no
//! operating system support: host class tags, the element trait, in-place
//! order-statistic selection, the even-length combining step and the
//! runtime type dispatcher.
//!
//! Matrices are dense and column-major. Every column is reduced on its own,
//! so a column is simply the sub-slice `[c * nrows, c * nrows + nrows)`.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod class;
pub mod combine;
#[cfg(feature = "alloc")]
pub mod dispatch;
pub mod error;
pub mod select;
pub mod traits;
pub mod validation;

pub use class::ClassId;
pub use combine::{
    combine_column, combine_column_f64, lower_half_max, median_of_column, median_of_column_f64,
    IntegerRounding,
};
#[cfg(feature = "alloc")]
pub use dispatch::{
    column_medians, column_medians_f64, run_fast_median, run_fast_median_f64, MedianVector,
    RawMatrix,
};
pub use error::*;
pub use select::{select_median, select_rank};
pub use traits::*;
pub use validation::{validate_buffer_len, validate_shape};
