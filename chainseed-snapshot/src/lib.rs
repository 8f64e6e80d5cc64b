// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Snapshot ingestion for the chainseed launch tooling.
//!
//! This crate turns a CSV ledger snapshot into an in-memory account index:
//! each row is validated, its balance is rounded onto the ledger's 4-decimal
//! grid and split into one liquid and two stake parts, and the resulting
//! records are keyed by account name. The index is the single input of the
//! injection and reconciliation stages.
//!
//! Malformed rows never abort an index build: they are counted by reason and
//! dropped, so one bad registration cannot block a launch. Source-level I/O
//! failures do abort.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub use error::SnapshotError;
pub use index::{SkipCounts, SnapshotIndex, SnapshotMeta};
pub use parse::{parse_row, RowFields, SnapshotFormat};
pub use record::{AccountRecord, SnapshotSettings};
pub use recover::{merge_recovered_keys, MergeStats};
pub use source::{FileSource, SnapshotSource};
pub use split::{split_balance, BalanceSplit};
pub use writer::write_derived_snapshot;

/// snapshot error
pub mod error;
/// account records and the snapshot index
pub mod index;
/// row formats and field extraction
pub mod parse;
/// per-account records and index-build settings
pub mod record;
/// recovered-key merge preprocessing
pub mod recover;
/// snapshot sources
pub mod source;
/// balance splitting policy
pub mod split;
/// derived snapshot artifact writer
pub mod writer;

#[cfg(any(test, feature = "test-exports"))]
/// test tooling
pub mod test_exports;
