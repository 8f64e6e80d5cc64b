// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! The launch engine: turns a snapshot index into seeding operations,
//! submits them batch by batch and reconciles the resulting chain state
//! against the snapshot.
//!
//! The engine is transport-agnostic: it drives any `ChainClient` from
//! chainseed-launch-exports and reports through any `ReportSink`.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod batcher;
mod builder;
mod inject;
mod reconcile;
mod report;

pub use batcher::pack_batches;
pub use builder::{build_register_groups, build_seeding_groups};
pub use inject::inject_batches;
pub use reconcile::reconcile_accounts;
pub use report::LogReportSink;

#[cfg(test)]
mod tests;
