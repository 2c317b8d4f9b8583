//! Column traversal strategies
//!
//! A kernel decides how the columns of a working copy are visited. The
//! reducer it is handed only ever sees one column at a time, so a kernel is
//! free to run columns in any order or concurrently, as long as the results
//! come back in column order.

use alloc::vec::Vec;

use crate::MedianElement;

/// Strategy for applying a per-column reduction to a column-major buffer
pub trait ColumnKernel {
    /// Apply `reduce` to each `nrows`-long column of `working`
    ///
    /// Returns one result per column, in column order. `nrows` must be
    /// non-zero and divide `working.len()`; the dispatcher validates both
    /// before calling a kernel.
    fn map_columns<T, R, F>(&self, working: &mut [T], nrows: usize, reduce: F) -> Vec<R>
    where
        T: MedianElement,
        R: Send,
        F: Fn(&mut [T]) -> R + Send + Sync;
}

/// Visit columns one after another on the calling thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Serial;

impl ColumnKernel for Serial {
    fn map_columns<T, R, F>(&self, working: &mut [T], nrows: usize, reduce: F) -> Vec<R>
    where
        T: MedianElement,
        R: Send,
        F: Fn(&mut [T]) -> R + Send + Sync,
    {
        working.chunks_exact_mut(nrows).map(reduce).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_visits_columns_in_order() {
        let mut working = [1i32, 2, 3, 4, 5, 6];
        let sums = Serial.map_columns(&mut working, 2, |column| column.iter().sum::<i32>());
        assert_eq!(sums, vec![3, 7, 11]);
    }

    #[test]
    fn test_serial_reducer_can_mutate_column() {
        let mut working = [3u8, 1, 2, 9, 8, 7];
        let firsts = Serial.map_columns(&mut working, 3, |column| {
            column.sort_unstable();
            column[0]
        });
        assert_eq!(firsts, vec![1, 7]);
        assert_eq!(working, [1, 2, 3, 7, 8, 9]);
    }
}
