//! The [`Sorter`] orchestrator and its injected collaborators.
//!
//! The host's extension registry and its notification bus are reached
//! through two traits instead of ambient globals: an [`ExtensionSource`]
//! yielding the live collection and a [`ChangePublisher`] with a single
//! publish operation. One `sort_by` call is a fresh, stateless,
//! fully synchronous pass over the then-current collection.

use std::cmp::Ordering;

use extorder_core::{Extension, LoadOrderChange, SORTED_TOPIC};
use tracing::debug;

use crate::errors::{FaultMode, Result};
use crate::partition::partition;
use crate::positions::available_sort_positions;
use crate::reassign::assign_sort_positions;
use crate::sorting::sort_bucket;

/// Yields the host's live extension collection.
///
/// The engine mutates the returned records in place. The host must not
/// mutate the collection concurrently during a pass; the engine does no
/// locking of its own.
pub trait ExtensionSource {
    /// Mutable view of the current extension collection.
    fn extensions_mut(&mut self) -> &mut [Extension];
}

/// Sink for the batched load-order notification.
pub trait ChangePublisher {
    /// Publish a payload on a named topic.
    fn publish(&mut self, topic: &str, changes: &[LoadOrderChange]);
}

/// Reorders extensions bucket by bucket per a caller-supplied comparator.
pub struct Sorter<S, P> {
    source: S,
    publisher: P,
    mode: FaultMode,
}

impl<S, P> Sorter<S, P>
where
    S: ExtensionSource,
    P: ChangePublisher,
{
    /// Create a sorter with the default [`FaultMode::Lenient`].
    #[must_use]
    pub fn new(source: S, publisher: P) -> Self {
        Self::with_fault_mode(source, publisher, FaultMode::default())
    }

    /// Create a sorter with an explicit fault mode.
    #[must_use]
    pub fn with_fault_mode(source: S, publisher: P, mode: FaultMode) -> Self {
        Self {
            source,
            publisher,
            mode,
        }
    }

    /// Reorder the host's extensions per `comparator`.
    ///
    /// For every bucket, in discovery order: capture the bucket's current
    /// sort positions, stable-sort its members, hand the captured
    /// positions back out in the new order. Records whose position
    /// actually changed are collected across all buckets; a non-empty
    /// collection is published once, as a single batch, on
    /// [`SORTED_TOPIC`]. Zero changes publish nothing.
    ///
    /// In [`FaultMode::Strict`] a position-count mismatch aborts the pass;
    /// in [`FaultMode::Lenient`] the faulted bucket is skipped.
    pub fn sort_by<F>(&mut self, mut comparator: F) -> Result<()>
    where
        F: FnMut(&Extension, &Extension) -> Ordering,
    {
        let extensions = self.source.extensions_mut();
        let buckets = partition(extensions);
        let mut changes: Vec<LoadOrderChange> = Vec::new();

        for mut bucket in buckets {
            debug!(bucket = %bucket.key, members = bucket.indices.len(), "sorting bucket");
            let positions = available_sort_positions(extensions, &bucket.indices);
            sort_bucket(extensions, &mut bucket.indices, &mut comparator);
            changes.extend(assign_sort_positions(
                extensions,
                &bucket.indices,
                &positions,
                &bucket.key,
                self.mode,
            )?);
        }

        if !changes.is_empty() {
            debug!(count = changes.len(), "publishing load order changes");
            self.publisher.publish(SORTED_TOPIC, &changes);
        }
        Ok(())
    }

    /// The source collaborator, for hosts that keep the sorter around.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The publisher collaborator.
    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{RecordingPublisher, VecSource};
    use extorder_core::ExecPhase;

    fn ext(id: &str, title: &str, scope: &str, phase: ExecPhase, sort: i64) -> Extension {
        Extension::new(id, title, scope, phase, sort)
    }

    fn by_title(a: &Extension, b: &Extension) -> Ordering {
        a.title.cmp(&b.title)
    }

    #[test]
    fn already_ordered_input_publishes_nothing() {
        // "A" holds 2, "B" holds 5; ascending by title leaves both
        // slots where they are.
        let source = VecSource::new(vec![
            ext("e1", "B", "webview", ExecPhase::BeforeLoadRules, 5),
            ext("e2", "A", "webview", ExecPhase::BeforeLoadRules, 2),
        ]);
        let mut sorter = Sorter::new(source, RecordingPublisher::default());
        sorter.sort_by(by_title).unwrap();

        assert!(sorter.publisher_mut().calls.is_empty());
        let extensions = sorter.source_mut().extensions_mut();
        assert_eq!(extensions[0].sort_position, 5);
        assert_eq!(extensions[1].sort_position, 2);
    }

    #[test]
    fn descending_order_swaps_and_publishes_once() {
        let source = VecSource::new(vec![
            ext("e1", "B", "webview", ExecPhase::BeforeLoadRules, 5),
            ext("e2", "A", "webview", ExecPhase::BeforeLoadRules, 2),
        ]);
        let mut sorter = Sorter::new(source, RecordingPublisher::default());
        sorter.sort_by(|a, b| by_title(b, a)).unwrap();

        let calls = &sorter.publisher_mut().calls;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SORTED_TOPIC);
        assert_eq!(calls[0].1.len(), 2);

        let extensions = sorter.source_mut().extensions_mut();
        assert_eq!(extensions[0].sort_position, 2); // "B" now first slot
        assert_eq!(extensions[1].sort_position, 5); // "A" now last slot
    }

    #[test]
    fn reorder_never_crosses_buckets() {
        let source = VecSource::new(vec![
            ext("e1", "Z", "main", ExecPhase::DomReady, 1),
            ext("e2", "A", "webview", ExecPhase::DomReady, 9),
        ]);
        let mut sorter = Sorter::new(source, RecordingPublisher::default());
        sorter.sort_by(by_title).unwrap();

        // Single-member buckets: nothing can move.
        assert!(sorter.publisher_mut().calls.is_empty());
        let extensions = sorter.source_mut().extensions_mut();
        assert_eq!(extensions[0].sort_position, 1);
        assert_eq!(extensions[1].sort_position, 9);
    }

    #[test]
    fn run_once_bucket_merges_and_reassigns_across_both() {
        let source = VecSource::new(vec![
            ext("e1", "C", "main", ExecPhase::BeforeLoadRulesRunOnce, 1),
            ext("e2", "A", "main", ExecPhase::BeforeLoadRules, 2),
            ext("e3", "B", "main", ExecPhase::BeforeLoadRules, 3),
        ]);
        let mut sorter = Sorter::new(source, RecordingPublisher::default());
        sorter.sort_by(by_title).unwrap();

        let extensions = sorter.source_mut().extensions_mut();
        // Merged bucket slots {1, 2, 3} redealt to A, B, C.
        assert_eq!(extensions[1].sort_position, 1); // A
        assert_eq!(extensions[2].sort_position, 2); // B
        assert_eq!(extensions[0].sort_position, 3); // C
        // Phase on the record survives normalization.
        assert_eq!(
            extensions[0].exec_phase,
            ExecPhase::BeforeLoadRulesRunOnce
        );
    }

    #[test]
    fn second_pass_is_idempotent() {
        let source = VecSource::new(vec![
            ext("e1", "B", "main", ExecPhase::AfterTags, 10),
            ext("e2", "A", "main", ExecPhase::AfterTags, 20),
        ]);
        let mut sorter = Sorter::new(source, RecordingPublisher::default());
        sorter.sort_by(by_title).unwrap();
        assert_eq!(sorter.publisher_mut().calls.len(), 1);

        sorter.sort_by(by_title).unwrap();
        assert_eq!(sorter.publisher_mut().calls.len(), 1, "no second publish");
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let mut sorter = Sorter::new(VecSource::new(vec![]), RecordingPublisher::default());
        sorter.sort_by(by_title).unwrap();
        assert!(sorter.publisher_mut().calls.is_empty());
    }

    #[test]
    fn strict_mode_succeeds_on_well_formed_input() {
        let source = VecSource::new(vec![
            ext("e1", "B", "main", ExecPhase::DomReady, 2),
            ext("e2", "A", "main", ExecPhase::DomReady, 1),
        ]);
        let mut sorter =
            Sorter::with_fault_mode(source, RecordingPublisher::default(), FaultMode::Strict);
        sorter.sort_by(by_title).unwrap();
        assert_eq!(sorter.publisher_mut().calls.len(), 1);
    }
}
