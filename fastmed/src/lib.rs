//! fastmed - column-wise medians without full sorts
//!
//! Computes the median of every column of a dense column-major matrix using
//! an O(n) selection per column instead of an O(n log n) sort.
//!
//! ## Architecture
//!
//! fastmed keeps the algorithm and the environment apart:
//!
//! - **fastmed-core**: class tags, selection, combining and type dispatch (`no_std`)
//! - **fastmed**: configuration, the parallel engine, the host array gateway and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use fastmed::{fast_median, ClassId, HostArray};
//!
//! fn example() -> fastmed::Result<()> {
//!     // Two columns: [3, 1, 2] and [6, 4, 5]
//!     let input = HostArray::from_slice(3, 2, &[3.0f64, 1.0, 2.0, 6.0, 4.0, 5.0]);
//!     let medians = fast_median(&[input])?;
//!
//!     assert_eq!(medians.class(), ClassId::Double);
//!     assert_eq!(medians.to_vec::<f64>(), Some(vec![2.0, 5.0]));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Linear-time selection**: introselect with a linear worst case per column
//! - **Eight element classes**: double, single and the 8 to 32-bit integers
//! - **Parallel columns**: large matrices are split across the rayon pool
//! - **Private working copy**: input buffers are never modified

pub use fastmed_core::{
    // Element and kernel traits
    ColumnKernel, MedianElement, Serial,
    // Class tags and results
    ClassId, IntegerRounding, MedianVector, RawMatrix,
    // Error handling
    ArgumentError, ErrorCategory, MedianError, Result,
};

pub mod config;
#[cfg(feature = "serde")]
pub mod document;
pub mod engine;
pub mod host;

pub use config::MedianConfig;
#[cfg(feature = "serde")]
pub use document::MatrixDocument;
pub use engine::MedianEngine;
pub use host::{fast_median, fast_median_with, HostArray};
