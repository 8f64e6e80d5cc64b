// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Tools to mock snapshot sources in tests.

use crate::error::SnapshotError;
use crate::source::SnapshotSource;
use std::io::{BufRead, Cursor};

/// A snapshot source serving rows from an in-memory string.
#[derive(Clone, Debug)]
pub struct MemorySource {
    rows: String,
}

impl MemorySource {
    /// source over the given newline-separated rows
    pub fn new(rows: impl Into<String>) -> Self {
        MemorySource { rows: rows.into() }
    }
}

impl SnapshotSource for MemorySource {
    fn open(&self) -> Result<Box<dyn BufRead + Send>, SnapshotError> {
        Ok(Box::new(Cursor::new(self.rows.clone().into_bytes())))
    }

    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }
}
