//! In-place order-statistic selection on a single column
//!
//! Selection reorders a column only as far as needed to put one rank in its
//! sorted position. It is backed by `select_nth_unstable_by`, an introselect
//! whose worst case stays linear, so adversarial columns cannot degrade it
//! to quadratic time.

use crate::MedianElement;

/// Partially reorder `column` so that position `rank` holds its sorted value
///
/// Afterwards every element before `rank` is `<=` it and every element after
/// is `>=` it, under [`MedianElement::total_order`]. No other ordering is
/// guaranteed.
///
/// # Panics
///
/// Panics if `rank >= column.len()`.
pub fn select_rank<T: MedianElement>(column: &mut [T], rank: usize) -> &mut T {
    let (_, value, _) = column.select_nth_unstable_by(rank, T::total_order);
    value
}

/// Partially reorder `column` around its median rank `len / 2`
///
/// For even lengths this is the upper of the two middle elements; the lower
/// half `column[..len / 2]` then holds exactly the `len / 2` smallest values.
///
/// # Panics
///
/// Panics if `column` is empty.
pub fn select_median<T: MedianElement>(column: &mut [T]) -> &mut T {
    let half = column.len() / 2;
    select_rank(column, half)
}
