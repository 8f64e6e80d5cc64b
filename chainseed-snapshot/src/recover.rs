// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Replays key recovery onto a genesis snapshot.

use crate::error::SnapshotError;
use crate::source::SnapshotSource;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Statistics of a recovered-key merge pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// snapshot rows written out
    pub rows: u64,
    /// distinct source keys with a recovered replacement
    pub recovered: u64,
    /// snapshot rows whose public key was replaced
    pub replaced: u64,
}

/// Merges recovered keys into a genesis snapshot.
///
/// `recovered` rows are `source_key,public_key` pairs. Snapshot rows whose
/// second field matches a source key (case-insensitive) get their fourth
/// field replaced; all other fields pass through trimmed but untouched. The
/// merge is preprocessing ahead of an index build, so no field is validated
/// here: a bad recovered key surfaces as a skipped row later.
pub fn merge_recovered_keys(
    snapshot: &dyn SnapshotSource,
    recovered: &dyn SnapshotSource,
    output: &Path,
) -> Result<MergeStats, SnapshotError> {
    let mut replacements: HashMap<String, String> = HashMap::new();
    let reader = recovered.open()?;
    for (row, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| {
            SnapshotError::FileError(format!(
                "error reading recovered key row {} from {}: {}",
                row + 1,
                recovered.describe(),
                err
            ))
        })?;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 || fields[0].is_empty() {
            debug!("skipping recovered key row {}", row + 1);
            continue;
        }
        replacements.insert(fields[0].to_lowercase(), fields[1].to_string());
    }

    let mut stats = MergeStats {
        recovered: replacements.len() as u64,
        ..Default::default()
    };

    let file = File::create(output).map_err(|err| {
        SnapshotError::FileError(format!(
            "error creating merged snapshot file {}: {}",
            output.display(),
            err
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let reader = snapshot.open()?;
    for (row, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| {
            SnapshotError::FileError(format!(
                "error reading snapshot row {} from {}: {}",
                row + 1,
                snapshot.describe(),
                err
            ))
        })?;
        let mut fields: Vec<String> = line.split(',').map(|f| f.trim().to_string()).collect();
        if fields.len() >= 5 {
            if let Some(replacement) = replacements.get(&fields[1].to_lowercase()) {
                fields[3] = replacement.clone();
                stats.replaced += 1;
            }
        }
        writeln!(writer, "{}", fields.join(",")).map_err(|err| {
            SnapshotError::FileError(format!(
                "error writing merged snapshot file {}: {}",
                output.display(),
                err
            ))
        })?;
        stats.rows += 1;
    }
    writer.flush().map_err(|err| {
        SnapshotError::FileError(format!(
            "error flushing merged snapshot file {}: {}",
            output.display(),
            err
        ))
    })?;

    info!(
        "merged {} recovered keys into {}: {} rows, {} replaced",
        stats.recovered,
        output.display(),
        stats.rows,
        stats.replaced
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_exports::MemorySource;

    #[test]
    fn test_matched_rows_get_the_recovered_key() {
        let snapshot = MemorySource::new(
            "1,0xAAAA,alice,oldkey1,5.0000\n2,0xbbbb,bob,oldkey2,7.0000\n3,0xcccc,carol,oldkey3,9.0000",
        );
        // matching is case-insensitive on the source key
        let recovered = MemorySource::new("0xaaaa,newkey1\n0xBBBB,newkey2\nmalformed");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");
        let stats = merge_recovered_keys(&snapshot, &recovered, &path).unwrap();

        assert_eq!(stats.rows, 3);
        assert_eq!(stats.recovered, 2);
        assert_eq!(stats.replaced, 2);

        let merged = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = merged.lines().collect();
        assert_eq!(rows[0], "1,0xAAAA,alice,newkey1,5.0000");
        assert_eq!(rows[1], "2,0xbbbb,bob,newkey2,7.0000");
        assert_eq!(rows[2], "3,0xcccc,carol,oldkey3,9.0000");
    }

    #[test]
    fn test_short_snapshot_rows_pass_through() {
        let snapshot = MemorySource::new("header,row\n1,0xaaaa,alice,oldkey1,5.0000");
        let recovered = MemorySource::new("0xaaaa,newkey1");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");
        let stats = merge_recovered_keys(&snapshot, &recovered, &path).unwrap();

        assert_eq!(stats.rows, 2);
        assert_eq!(stats.replaced, 1);
        let merged = std::fs::read_to_string(&path).unwrap();
        assert_eq!(merged.lines().next().unwrap(), "header,row");
    }
}
