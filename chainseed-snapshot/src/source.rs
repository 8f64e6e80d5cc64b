// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Where snapshot rows come from.

use crate::error::SnapshotError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// A restartable provider of snapshot rows.
///
/// `open` returns a fresh reader positioned at the first row; callers that
/// need several passes over the snapshot simply open it again. Retrieval of
/// remote snapshots lives behind this same seam, outside this crate.
pub trait SnapshotSource: Send + Sync {
    /// opens a fresh reader over the snapshot rows
    fn open(&self) -> Result<Box<dyn BufRead + Send>, SnapshotError>;

    /// identifies the source in logs
    fn describe(&self) -> String;
}

/// A snapshot stored as a local CSV file.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// snapshot source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl SnapshotSource for FileSource {
    fn open(&self) -> Result<Box<dyn BufRead + Send>, SnapshotError> {
        let file = File::open(&self.path).map_err(|err| {
            SnapshotError::FileError(format!(
                "error opening snapshot file {}: {}",
                self.path.display(),
                err
            ))
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_reopens_from_the_start() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();
        let source = FileSource::new(file.path());

        for _ in 0..2 {
            let reader = source.open().unwrap();
            let rows: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
            assert_eq!(rows, vec!["first", "second"]);
        }
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let source = FileSource::new("/nonexistent/snapshot.csv");
        assert!(matches!(
            source.open(),
            Err(SnapshotError::FileError(_))
        ));
    }
}
