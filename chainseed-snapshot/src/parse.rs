// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Snapshot row formats and field extraction.

use chainseed_models::ModelsError;
use std::str::FromStr;

/// Column layout of a snapshot file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `id,source_key,name,public_key,balance` rows from the registration snapshot
    Genesis,
    /// `name,balance[,cpu_stake,net_stake,liquid]` rows, the shape this tool's
    /// derived artifact uses; the trailing columns are recomputed and ignored
    Balances,
}

impl SnapshotFormat {
    /// fields a row must carry to be usable under this format
    pub fn min_fields(&self) -> usize {
        match self {
            SnapshotFormat::Genesis => 5,
            SnapshotFormat::Balances => 2,
        }
    }
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SnapshotFormat::Genesis => write!(f, "genesis"),
            SnapshotFormat::Balances => write!(f, "balances"),
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = ModelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genesis" => Ok(SnapshotFormat::Genesis),
            "balances" => Ok(SnapshotFormat::Balances),
            other => Err(ModelsError::CheckedOperationError(format!(
                "unknown snapshot format {}",
                other
            ))),
        }
    }
}

/// The raw text fields of one row, before validation.
#[derive(Debug, PartialEq, Eq)]
pub struct RowFields<'a> {
    /// account name field
    pub name: &'a str,
    /// public key field, absent in the balances format
    pub public_key: Option<&'a str>,
    /// balance field
    pub balance: &'a str,
}

/// Splits a CSV row into the fields the engine consumes.
///
/// Returns `None` when the row carries fewer fields than the format requires,
/// which covers header lines and blank lines. Fields are trimmed; the
/// snapshot data never quotes commas.
pub fn parse_row(line: &str, format: SnapshotFormat) -> Option<RowFields<'_>> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < format.min_fields() {
        return None;
    }
    Some(match format {
        SnapshotFormat::Genesis => RowFields {
            name: fields[2],
            public_key: Some(fields[3]),
            balance: fields[4],
        },
        SnapshotFormat::Balances => RowFields {
            name: fields[0],
            public_key: None,
            balance: fields[1],
        },
    })
}
