// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Tools to observe the engine from tests.

use crate::report::{ProgressEvent, ReportSink, RunSummary};
use std::sync::Mutex;

/// A sink recording every event and summary it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
    summaries: Mutex<Vec<RunSummary>>,
}

impl RecordingSink {
    /// empty recording sink
    pub fn new() -> Self {
        Default::default()
    }

    /// everything reported through `progress` so far
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// everything reported through `summary` so far
    pub fn summaries(&self) -> Vec<RunSummary> {
        self.summaries.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingSink {
    fn progress(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn summary(&self, summary: &RunSummary) {
        self.summaries.lock().unwrap().push(summary.clone());
    }
}
