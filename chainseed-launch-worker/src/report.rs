// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! A report sink rendering progress and summaries through the log.

use chainseed_launch_exports::{ProgressEvent, ReportSink, RunSummary};
use tracing::{info, warn};

/// Sink writing every event and the final summary to the log.
///
/// The engine already coalesces progress to a human cadence, so everything
/// received here is worth a line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReportSink;

impl ReportSink for LogReportSink {
    fn progress(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::IndexBuilt { accounts, skipped } => {
                info!(
                    "snapshot index ready: {} accounts, {} rows skipped",
                    accounts, skipped
                )
            }
            ProgressEvent::BatchesPrepared {
                batches,
                operations,
            } => {
                info!("{} batches prepared, {} operations", batches, operations)
            }
            ProgressEvent::BatchConfirmed {
                batch_id,
                accounts_done,
                batches_left,
            } => {
                info!(
                    "batch {} confirmed, {} accounts submitted, {} batches left",
                    batch_id, accounts_done, batches_left
                )
            }
            ProgressEvent::AccountsChecked { checked, total } => {
                info!("{}/{} accounts reconciled", checked, total)
            }
            ProgressEvent::WalletUnlockRetried => {
                warn!("wallet unlock failed, retrying")
            }
        }
    }

    fn summary(&self, summary: &RunSummary) {
        info!(
            "run summary: {} accounts ({} rows skipped), {} batches confirmed, {} failed, \
             {} mismatches, {} read failures, snapshot total {}",
            summary.accounts,
            summary.skipped,
            summary.batches_confirmed,
            summary.batches_failed,
            summary.mismatched,
            summary.read_failures,
            summary.snapshot_total
        );
        if let Some(supply) = summary.chain_supply {
            info!("issued supply on chain: {}", supply);
        }
    }
}
