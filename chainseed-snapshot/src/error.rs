// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Definition of the snapshot error

use chainseed_models::Amount;
use displaydoc::Display;
use thiserror::Error;

/// snapshot error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum SnapshotError {
    /// file error: {0}
    FileError(String),
    /// balance {0} cannot cover its liquid tier
    RemainderUnderflow(Amount),
    /// balance total overflows the amount range
    TotalOverflow,
}
