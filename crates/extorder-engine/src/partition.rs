//! Bucketing of extensions by (scope, normalized execution phase).
//!
//! Buckets hold indices into the caller's slice rather than owned copies,
//! so later steps can mutate the records in place while the grouping
//! stays valid.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use extorder_core::{ExecPhase, Extension, Scope};

/// Grouping key of a bucket.
///
/// A struct key cannot collide the way naive string concatenation can, and
/// still renders as `scope_phase` for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BucketKey {
    /// Scope of every member.
    pub scope: Scope,
    /// Normalized phase of every member (never a run-once variant).
    pub phase: ExecPhase,
}

impl BucketKey {
    /// The key an extension partitions under.
    #[must_use]
    pub fn of(extension: &Extension) -> Self {
        Self {
            scope: extension.scope.clone(),
            phase: extension.exec_phase.normalized(),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.scope, self.phase.as_str())
    }
}

/// One bucket: its key and the indices of its members, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    /// Grouping key.
    pub key: BucketKey,
    /// Indices into the partitioned slice, input order preserved.
    pub indices: Vec<usize>,
}

/// Group extensions by (scope, normalized phase).
///
/// Buckets come back in discovery order (first member seen first) and
/// each bucket's indices preserve input order. Records are never
/// modified — in particular a run-once phase is normalized only inside
/// the derived key, not on the record.
#[must_use]
pub fn partition(extensions: &[Extension]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut by_key: HashMap<BucketKey, usize> = HashMap::new();

    for (index, extension) in extensions.iter().enumerate() {
        let key = BucketKey::of(extension);
        match by_key.entry(key) {
            Entry::Occupied(slot) => buckets[*slot.get()].indices.push(index),
            Entry::Vacant(slot) => {
                let key = slot.key().clone();
                let _ = slot.insert(buckets.len());
                buckets.push(Bucket {
                    key,
                    indices: vec![index],
                });
            }
        }
    }

    buckets
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
