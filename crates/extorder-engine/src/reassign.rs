//! Reassignment of captured sort positions onto a freshly sorted bucket.

use extorder_core::{Extension, LoadOrderChange};
use tracing::error;

use crate::errors::{EngineError, FaultMode, Result};
use crate::partition::BucketKey;

/// Walk the sorted bucket and the captured ascending positions in
/// lockstep, writing `positions[i]` into the i-th member.
///
/// A write only happens when the value actually differs, and only actual
/// writes produce change records — re-running with an unchanged order
/// yields zero records. Change records carry a snapshot of the record
/// after the write.
///
/// A count mismatch between positions and members means the bucket
/// changed under us mid-pass, which a single synchronous pass should make
/// impossible. The bucket is then left entirely unmodified: in
/// [`FaultMode::Strict`] the fault is returned as an error, in
/// [`FaultMode::Lenient`] it is logged and an empty change list comes
/// back.
pub fn assign_sort_positions(
    extensions: &mut [Extension],
    indices: &[usize],
    positions: &[i64],
    key: &BucketKey,
    mode: FaultMode,
) -> Result<Vec<LoadOrderChange>> {
    if positions.len() != indices.len() {
        error!(
            bucket = %key,
            positions = positions.len(),
            extensions = indices.len(),
            "sort position count mismatch; bucket not reassigned"
        );
        let fault = EngineError::PositionCountMismatch {
            bucket: key.to_string(),
            positions: positions.len(),
            extensions: indices.len(),
        };
        return match mode {
            FaultMode::Strict => Err(fault),
            FaultMode::Lenient => Ok(Vec::new()),
        };
    }

    let mut changes = Vec::new();
    for (&index, &position) in indices.iter().zip(positions) {
        let extension = &mut extensions[index];
        if extension.sort_position == position {
            continue;
        }
        extension.sort_position = position;
        changes.push(LoadOrderChange::sort_updated(extension.clone()));
    }

    Ok(changes)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
