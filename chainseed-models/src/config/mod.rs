// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Default values used to initialize configuration structures
//!
//! # Default hard-coded
//!
//! Each crate may contain a `settings.rs` or a `config.rs`; the `Default`
//! implementation of each configuration object takes its values from this
//! module.
//!
//! These are the hard-coded values that make sense to never be modified by a
//! user. They are passed with dependency injection in a `cfg` parameter for
//! each worker, which is convenient for unit tests.

pub mod constants;
pub use constants::*;

// Export tool to read user setting file
mod chainseed_settings;
pub use chainseed_settings::build_chainseed_settings;
