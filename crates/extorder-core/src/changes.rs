//! Load-order change records and the notification topic.
//!
//! The wire shape matches the host's TypeScript consumers exactly:
//! `{ "item": {...}, "changed": ["sort_updated"] }`. `changed` stays an
//! array so new change kinds can be added without breaking consumers.

use serde::{Deserialize, Serialize};

use crate::extension::Extension;

/// Topic the batched change list is published on.
pub const SORTED_TOPIC: &str = "updated_extension_order";

/// What changed on an extension. Currently only the sort position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// `sort_position` was rewritten.
    SortUpdated,
}

/// One extension whose load order changed during a reorder pass.
///
/// `item` is a snapshot of the record *after* its new position was
/// applied. Records are transient: returned once per pass, never retained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOrderChange {
    /// The updated extension.
    pub item: Extension,
    /// Which fields changed.
    pub changed: Vec<ChangeKind>,
}

impl LoadOrderChange {
    /// A change record marking a sort-position update.
    #[must_use]
    pub fn sort_updated(item: Extension) -> Self {
        Self {
            item,
            changed: vec![ChangeKind::SortUpdated],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::ExecPhase;

    #[test]
    fn wire_shape_matches_consumers() {
        let change = LoadOrderChange::sort_updated(Extension::new(
            "ext-1",
            "B",
            "main",
            ExecPhase::BeforeLoadRules,
            5,
        ));
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["changed"], serde_json::json!(["sort_updated"]));
        assert_eq!(json["item"]["sortPosition"], 5);
    }

    #[test]
    fn topic_constant_is_stable() {
        assert_eq!(SORTED_TOPIC, "updated_extension_order");
    }
}
