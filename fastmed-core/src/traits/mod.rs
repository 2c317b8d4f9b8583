//! Abstractions shared by the selection, combining and dispatch layers

pub mod element;
#[cfg(feature = "alloc")]
pub mod kernel;

pub use element::MedianElement;
#[cfg(feature = "alloc")]
pub use kernel::{ColumnKernel, Serial};
