//! # extorder-engine
//!
//! Bucketed stable reordering of extension load order.
//!
//! Extensions only ever trade places with peers that execute in the same
//! logical bucket — same scope, same normalized execution phase — and a
//! bucket's multiset of sort positions is preserved exactly across a
//! reorder; only the assignment of positions to records changes.
//!
//! Four pure steps compose into one entry point:
//!
//! - **[`partition::partition`]**: bucket records by (scope, normalized phase)
//! - **[`positions::available_sort_positions`]**: capture a bucket's slots
//! - **[`sorting::sort_bucket`]**: stable-sort a bucket per the caller's
//!   comparator
//! - **[`reassign::assign_sort_positions`]**: map the captured slots back
//!   onto the new order, producing change records
//! - **[`orchestrator::Sorter`]**: drives the steps over every bucket and
//!   publishes one batched notification when anything changed
//!
//! The engine mutates the records it is given — that is the contract, not
//! an accident: the host's live references must reflect the update.

#![deny(unsafe_code)]

pub mod errors;
pub mod memory;
pub mod orchestrator;
pub mod partition;
pub mod positions;
pub mod reassign;
pub mod sorting;

pub use errors::{EngineError, FaultMode, Result};
pub use memory::{RecordingPublisher, VecSource};
pub use orchestrator::{ChangePublisher, ExtensionSource, Sorter};
pub use partition::{Bucket, BucketKey, partition};
