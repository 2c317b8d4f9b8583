//! Column median engine with optional rayon parallelism
//!
//! Columns never share memory, so the engine can hand each one to a rayon
//! task. Each task owns a disjoint `&mut` column of the working copy and
//! produces the value for its own output slot; `collect` on an indexed
//! parallel iterator keeps the results in column order.

use fastmed_core::{
    column_medians, column_medians_f64, run_fast_median, run_fast_median_f64, ColumnKernel,
    MedianElement, MedianVector, RawMatrix, Result, Serial,
};
use log::{debug, trace};
use rayon::prelude::*;

use crate::MedianConfig;

/// Computes column medians according to a [`MedianConfig`]
#[derive(Debug, Clone, Default)]
pub struct MedianEngine {
    config: MedianConfig,
}

impl MedianEngine {
    pub fn new(config: MedianConfig) -> Self {
        Self { config }
    }

    /// Medians of a host matrix, in the input's class
    pub fn compute(&self, matrix: &RawMatrix<'_>) -> Result<MedianVector> {
        debug!(
            "Computing medians of {}x{} {} matrix",
            matrix.nrows, matrix.ncols, matrix.class
        );
        run_fast_median(matrix, self, self.config.rounding)
    }

    /// Medians of a host matrix, promoted to f64
    pub fn compute_f64(&self, matrix: &RawMatrix<'_>) -> Result<Vec<f64>> {
        debug!(
            "Computing promoted medians of {}x{} {} matrix",
            matrix.nrows, matrix.ncols, matrix.class
        );
        run_fast_median_f64(matrix, self)
    }

    /// Medians of a typed column-major buffer; `data` is left untouched
    pub fn compute_typed<T: MedianElement>(
        &self,
        data: &[T],
        nrows: usize,
        ncols: usize,
    ) -> Result<Vec<T>> {
        column_medians(data, nrows, ncols, self, self.config.rounding)
    }

    pub fn compute_typed_f64<T: MedianElement>(
        &self,
        data: &[T],
        nrows: usize,
        ncols: usize,
    ) -> Result<Vec<f64>> {
        column_medians_f64(data, nrows, ncols, self)
    }
}

impl ColumnKernel for MedianEngine {
    fn map_columns<T, R, F>(&self, working: &mut [T], nrows: usize, reduce: F) -> Vec<R>
    where
        T: MedianElement,
        R: Send,
        F: Fn(&mut [T]) -> R + Send + Sync,
    {
        let ncols = working.len() / nrows;

        if self.config.should_parallelize(nrows, ncols) {
            debug!(
                "Splitting {ncols} columns across {} threads",
                rayon::current_num_threads()
            );
            working.par_chunks_exact_mut(nrows).map(reduce).collect()
        } else {
            trace!("Processing {ncols} columns serially");
            Serial.map_columns(working, nrows, reduce)
        }
    }
}
