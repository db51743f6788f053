//! The [`Extension`] record.

use serde::{Deserialize, Serialize};

use crate::ids::{ExtensionId, Scope};
use crate::phase::ExecPhase;

/// A live extension record.
///
/// Supplied by the host and mutated in place by the engine: reordering
/// rewrites `sort_position` on the record the host already holds, so the
/// host's own references observe the update immediately. No other field is
/// ever written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Unique ID across the whole collection.
    pub id: ExtensionId,
    /// Display title. The engine never reads it; comparators usually do.
    pub title: String,
    /// Partition key, never interpreted.
    pub scope: Scope,
    /// Execution phase tag.
    pub exec_phase: ExecPhase,
    /// Numeric load-order slot. Unique within a (scope, normalized phase)
    /// bucket at any valid state, not globally.
    pub sort_position: i64,
}

impl Extension {
    /// Create a record with all fields set.
    #[must_use]
    pub fn new(
        id: impl Into<ExtensionId>,
        title: impl Into<String>,
        scope: impl Into<Scope>,
        exec_phase: ExecPhase,
        sort_position: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scope: scope.into(),
            exec_phase,
            sort_position,
        }
    }
}
