//! Engine error types and fault handling mode.

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors the reorder engine can produce.
///
/// There is exactly one: a bucket whose captured slot count no longer
/// matches its member count. Partitioning and slot extraction are total,
/// and comparator misbehavior is the caller's problem.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A bucket's captured sort positions and its members fell out of
    /// lockstep between extraction and reassignment. The bucket was left
    /// unmodified.
    #[error(
        "sort position count mismatch in bucket {bucket}: \
         {positions} positions for {extensions} extensions; bucket not reassigned"
    )]
    PositionCountMismatch {
        /// Bucket key in `scope_phase` form.
        bucket: String,
        /// Number of captured sort positions.
        positions: usize,
        /// Number of extensions in the bucket.
        extensions: usize,
    },
}

/// How the orchestrator reacts to a [`EngineError::PositionCountMismatch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaultMode {
    /// Abort the whole pass with an error; buckets after the faulted one
    /// are not processed.
    Strict,
    /// Log the fault, skip the bucket, keep processing the rest.
    #[default]
    Lenient,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_display_names_bucket_and_counts() {
        let err = EngineError::PositionCountMismatch {
            bucket: "main_dom_ready".to_string(),
            positions: 2,
            extensions: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("main_dom_ready"));
        assert!(msg.contains("2 positions"));
        assert!(msg.contains("3 extensions"));
    }

    #[test]
    fn default_mode_is_lenient() {
        assert_eq!(FaultMode::default(), FaultMode::Lenient);
    }
}
