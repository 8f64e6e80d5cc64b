// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! # Overview
//!
//! This crate provides everything needed to drive and observe the launch
//! engine (chainseed-launch-worker crate) that turns a snapshot index into
//! submitted transactions and reconciles the result against the chain.
//!
//! The engine itself never talks to a node: it goes through the
//! `ChainClient` trait defined here, so transports (chainseed-sdk) and test
//! doubles plug in interchangeably. Progress flows out through the
//! `ReportSink` trait.
//!
//! # Architecture
//!
//! ## chain_controller.rs
//! Defines the `ChainClient` trait the engine submits and reads through,
//! with the submission options and account state types it exchanges.
//!
//! ## config.rs
//! Configuration parameters for the launch engine.
//!
//! ## report.rs
//! Progress events, the `ReportSink` trait and the run report types.
//!
//! ## error.rs
//! Defines error types for the crate.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, tooling useful for
//! testing purposes is exported. See test_exports/mod.rs for details.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod chain_controller;
mod config;
mod error;
mod report;

pub use chain_controller::{
    AccountState, ChainClient, PendingRefund, SubmitOptions, TransactionAck,
};
#[cfg(any(test, feature = "test-exports"))]
pub use chain_controller::MockChainClient;
pub use config::{LaunchConfig, RegistryConfig, WalletConfig};
pub use error::{ClientError, LaunchError};
pub use report::{
    AccountMismatch, BatchOutcome, BatchStatus, InjectionReport, MismatchKind, ProgressEvent,
    ReconciliationReport, ReportSink, RunSummary,
};

#[cfg(any(test, feature = "test-exports"))]
pub mod test_exports;
