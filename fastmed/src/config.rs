//! Configuration for column median computation

use fastmed_core::IntegerRounding;

/// Configuration for a median computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedianConfig {
    /// How integer classes round the mean of two middle elements
    pub rounding: IntegerRounding,
    /// Return f64 medians for every input class
    pub promote: bool,
    /// Allow columns to be processed on the rayon thread pool
    pub parallel: bool,
    /// Fewest columns worth splitting across threads
    pub min_parallel_columns: usize,
    /// Fewest total elements worth splitting across threads
    pub min_parallel_elements: usize,
}

impl MedianConfig {
    /// Config that never leaves the calling thread
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Set integer rounding mode
    pub fn with_rounding(mut self, rounding: IntegerRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Return f64 medians regardless of the input class
    pub fn with_promote(mut self, promote: bool) -> Self {
        self.promote = promote;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the matrix size below which columns stay on one thread
    pub fn with_parallel_threshold(mut self, min_columns: usize, min_elements: usize) -> Self {
        self.min_parallel_columns = min_columns;
        self.min_parallel_elements = min_elements;
        self
    }

    /// Whether an `nrows x ncols` matrix should be split across threads
    pub fn should_parallelize(&self, nrows: usize, ncols: usize) -> bool {
        self.parallel
            && ncols >= self.min_parallel_columns.max(2)
            && nrows.saturating_mul(ncols) >= self.min_parallel_elements
    }
}

impl Default for MedianConfig {
    fn default() -> Self {
        Self {
            rounding: IntegerRounding::TowardZero,
            promote: false,
            parallel: true,
            min_parallel_columns: 64,
            min_parallel_elements: 64 * 1024,
        }
    }
}
