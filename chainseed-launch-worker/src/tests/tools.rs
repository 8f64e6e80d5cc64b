// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Shared fixtures for the engine tests.

use chainseed_models::{AccountName, Amount};
use chainseed_snapshot::test_exports::MemorySource;
use chainseed_snapshot::{SnapshotFormat, SnapshotIndex};
use std::str::FromStr;

pub const GOOD_KEY: &str = "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV";

/// genesis-format row for `name` holding `balance`
pub fn genesis_row(name: &str, balance: &str) -> String {
    format!("7,0xdeadbeef,{},{},{}", name, GOOD_KEY, balance)
}

/// index built from genesis rows, default settings
pub fn genesis_index(rows: &[(&str, &str)]) -> SnapshotIndex {
    let text = rows
        .iter()
        .map(|(name, balance)| genesis_row(name, balance))
        .collect::<Vec<_>>()
        .join("\n");
    SnapshotIndex::build(
        &MemorySource::new(text),
        SnapshotFormat::Genesis,
        &Default::default(),
    )
    .unwrap()
}

pub fn name(text: &str) -> AccountName {
    AccountName::from_str(text).unwrap()
}

pub fn amount(text: &str) -> Amount {
    Amount::from_str(text).unwrap()
}
