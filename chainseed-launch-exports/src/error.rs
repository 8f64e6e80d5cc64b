// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Definition of the launch engine errors

use displaydoc::Display;
use thiserror::Error;

/// Errors a chain client reports back to the engine.
///
/// The engine keys its fault handling on the variant: a `Transport` failure
/// during reconciliation is a record-scoped read failure, while any error
/// during submission is fatal for the run.
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// backend rejected the request: {0}
    Rejected(String),
    /// account {0} does not exist on chain
    UnknownAccount(String),
    /// transport error: {0}
    Transport(String),
}

/// launch engine error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum LaunchError {
    /// account {0} has no public key to create it with
    MissingKey(String),
    /// client error: {0}
    ClientError(#[from] ClientError),
    /// engine error: {0}
    EngineError(String),
}
