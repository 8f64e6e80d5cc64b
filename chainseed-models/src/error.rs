// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Definition of the models error

use displaydoc::Display;
use thiserror::Error;

/// models error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelsError {
    /// amount parse error: {0}
    AmountParseError(String),
    /// account name parse error: {0}
    NameParseError(String),
    /// public key parse error: {0}
    KeyParseError(String),
    /// checked operation error: {0}
    CheckedOperationError(String),
}
