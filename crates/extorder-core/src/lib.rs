//! # extorder-core
//!
//! Foundation types for the extorder load-order engine.
//!
//! This crate provides the shared vocabulary the engine crate depends on:
//!
//! - **Branded IDs**: [`ids::ExtensionId`] and [`ids::Scope`] as newtypes
//! - **Phases**: [`phase::ExecPhase`] with the run-once equivalence table
//! - **Records**: [`extension::Extension`], the live record the engine
//!   mutates in place
//! - **Changes**: [`changes::LoadOrderChange`] and the
//!   [`changes::SORTED_TOPIC`] notification topic
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `extorder-engine`.

#![deny(unsafe_code)]

pub mod changes;
pub mod extension;
pub mod ids;
pub mod phase;

pub use changes::{ChangeKind, LoadOrderChange, SORTED_TOPIC};
pub use extension::Extension;
pub use ids::{ExtensionId, Scope};
pub use phase::ExecPhase;
