// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Shared data model for the chainseed launch tooling: fixed-point token
//! amounts, backend account identities and keys, and the operations that are
//! batched and submitted when seeding a freshly launched network.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub use amount::Amount;
pub use error::ModelsError;
pub use key::PublicKey;
pub use name::AccountName;
pub use operation::{Batch, Operation, OperationAuth, OperationGroup, OperationKind};

pub mod amount;
/// configuration constants and the settings file loader
pub mod config;
/// models error
pub mod error;
/// backend public keys
pub mod key;
/// backend account names
pub mod name;
/// operations, operation groups and submission batches
pub mod operation;
