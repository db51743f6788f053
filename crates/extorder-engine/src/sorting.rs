//! Stable sorting of a bucket by a caller-supplied comparator.

use std::cmp::Ordering;

use extorder_core::Extension;

/// Stable-sort a bucket's index list per the caller's comparator.
///
/// The comparator is opaque to the engine: no ordering semantics are
/// imposed beyond delegating to it, and ties keep their relative input
/// order because `sort_by` is stable. A non-total or non-deterministic
/// comparator produces whatever order the sort primitive settles on.
pub fn sort_bucket<F>(extensions: &[Extension], indices: &mut [usize], mut comparator: F)
where
    F: FnMut(&Extension, &Extension) -> Ordering,
{
    indices.sort_by(|&a, &b| comparator(&extensions[a], &extensions[b]));
}
