// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! This module exposes useful tooling for testing.
//! It is only compiled and exported by the crate if the "test-exports"
//! feature is enabled.
//!
//! # Architecture
//!
//! ## config.rs
//! Provides a default launch configuration for testing.
//!
//! ## tools.rs
//! Provides a `ReportSink` that records everything it receives, for
//! asserting on engine progress within tests. The `ChainClient` mock
//! (`MockChainClient`) is generated on the trait itself and re-exported
//! from the crate root.

mod config;
mod tools;

pub use tools::*;
