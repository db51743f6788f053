//! In-memory collaborators.
//!
//! [`VecSource`] backs the engine with a plain owned `Vec` — enough for
//! embedding hosts that already materialized their registry — and
//! [`RecordingPublisher`] captures publishes for inspection in tests and
//! diagnostics.

use extorder_core::{Extension, LoadOrderChange};

use crate::orchestrator::{ChangePublisher, ExtensionSource};

/// An [`ExtensionSource`] over an owned `Vec<Extension>`.
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    extensions: Vec<Extension>,
}

impl VecSource {
    /// Wrap a collection.
    #[must_use]
    pub fn new(extensions: Vec<Extension>) -> Self {
        Self { extensions }
    }

    /// Consume the source, returning the (possibly reordered) collection.
    #[must_use]
    pub fn into_inner(self) -> Vec<Extension> {
        self.extensions
    }
}

impl ExtensionSource for VecSource {
    fn extensions_mut(&mut self) -> &mut [Extension] {
        &mut self.extensions
    }
}

/// A [`ChangePublisher`] that records every publish call.
#[derive(Clone, Debug, Default)]
pub struct RecordingPublisher {
    /// Each publish as (topic, payload), in call order.
    pub calls: Vec<(String, Vec<LoadOrderChange>)>,
}

impl ChangePublisher for RecordingPublisher {
    fn publish(&mut self, topic: &str, changes: &[LoadOrderChange]) {
        self.calls.push((topic.to_string(), changes.to_vec()));
    }
}
