//! Capture of a bucket's current sort positions.

use extorder_core::Extension;

/// The sort positions a bucket currently occupies, sorted ascending.
///
/// Captured before sorting destroys the record-to-slot association, so
/// reassignment can hand the same slots back out in the new order.
/// Numeric ordering, not lexical. Empty input yields empty output.
#[must_use]
pub fn available_sort_positions(extensions: &[Extension], indices: &[usize]) -> Vec<i64> {
    let mut positions: Vec<i64> = indices
        .iter()
        .map(|&index| extensions[index].sort_position)
        .collect();
    positions.sort_unstable();
    positions
}
