//! Execution phases and the run-once equivalence table.
//!
//! Two phases exist in a run-once flavor whose wire form carries the
//! `_ro` suffix. For partitioning, a run-once phase counts as its
//! repeating counterpart; the record itself keeps its original phase.
//! The mapping is a small static table so it stays inspectable and
//! exhaustively testable.

use serde::{Deserialize, Serialize};

/// Wire suffix marking a run-once phase variant.
pub const RUN_ONCE_SUFFIX: &str = "_ro";

/// Execution phase of an extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecPhase {
    /// Runs during the pre-loader stage.
    Preloader,
    /// Runs before load rules, every load.
    BeforeLoadRules,
    /// Runs before load rules, first load only.
    #[serde(rename = "before_load_rules_ro")]
    BeforeLoadRulesRunOnce,
    /// Runs after load rules, every load.
    AfterLoadRules,
    /// Runs after load rules, first load only.
    #[serde(rename = "after_load_rules_ro")]
    AfterLoadRulesRunOnce,
    /// Runs after tags fire.
    AfterTags,
    /// Runs on DOM ready.
    DomReady,
}

/// Run-once phases and the repeating phase each collapses into for
/// partitioning. Exactly these two equivalences exist.
const RUN_ONCE_EQUIVALENTS: &[(ExecPhase, ExecPhase)] = &[
    (ExecPhase::BeforeLoadRulesRunOnce, ExecPhase::BeforeLoadRules),
    (ExecPhase::AfterLoadRulesRunOnce, ExecPhase::AfterLoadRules),
];

impl ExecPhase {
    /// The wire string for this phase.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preloader => "preloader",
            Self::BeforeLoadRules => "before_load_rules",
            Self::BeforeLoadRulesRunOnce => "before_load_rules_ro",
            Self::AfterLoadRules => "after_load_rules",
            Self::AfterLoadRulesRunOnce => "after_load_rules_ro",
            Self::AfterTags => "after_tags",
            Self::DomReady => "dom_ready",
        }
    }

    /// Whether this is a run-once variant.
    #[must_use]
    pub fn is_run_once(self) -> bool {
        RUN_ONCE_EQUIVALENTS.iter().any(|&(from, _)| from == self)
    }

    /// The phase used for partitioning: run-once variants collapse into
    /// their repeating counterpart, every other phase maps to itself.
    #[must_use]
    pub fn normalized(self) -> Self {
        RUN_ONCE_EQUIVALENTS
            .iter()
            .find(|&&(from, _)| from == self)
            .map_or(self, |&(_, to)| to)
    }

    /// All phases, in execution order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Preloader,
            Self::BeforeLoadRules,
            Self::BeforeLoadRulesRunOnce,
            Self::AfterLoadRules,
            Self::AfterLoadRulesRunOnce,
            Self::AfterTags,
            Self::DomReady,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
