// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Writes the derived snapshot artifact.

use crate::error::SnapshotError;
use crate::index::SnapshotIndex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes one `name,balance,cpu_stake,net_stake,liquid` row per indexed
/// account, in name order, and returns the row count.
///
/// The artifact records the decomposition actually used for a launch and
/// re-parses under `SnapshotFormat::Balances` to identical records.
pub fn write_derived_snapshot(index: &SnapshotIndex, path: &Path) -> Result<u64, SnapshotError> {
    let file = File::create(path).map_err(|err| {
        SnapshotError::FileError(format!(
            "error creating derived snapshot file {}: {}",
            path.display(),
            err
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let mut rows: u64 = 0;
    for (name, record) in index.iter() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            name, record.raw_balance, record.cpu_stake, record.net_stake, record.liquid
        )
        .map_err(|err| {
            SnapshotError::FileError(format!(
                "error writing derived snapshot file {}: {}",
                path.display(),
                err
            ))
        })?;
        rows += 1;
    }
    writer.flush().map_err(|err| {
        SnapshotError::FileError(format!(
            "error flushing derived snapshot file {}: {}",
            path.display(),
            err
        ))
    })?;
    info!(
        "wrote {} derived snapshot rows to {}",
        rows,
        path.display()
    );
    Ok(rows)
}
