// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Progress reporting and the run report types.

use chainseed_models::{AccountName, Amount, Operation};
use serde::Serialize;

/// Events the engine reports while a run progresses.
///
/// Events are already coalesced to a human cadence by the engine; a sink can
/// forward them without further rate limiting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    /// the snapshot index is built
    IndexBuilt {
        /// accounts kept
        accounts: u64,
        /// rows dropped
        skipped: u64,
    },
    /// groups are packed and the batch list is final
    BatchesPrepared {
        /// number of batches
        batches: u64,
        /// operations across all batches
        operations: u64,
    },
    /// a slice of batches got their backend acks
    BatchConfirmed {
        /// id of the last confirmed batch
        batch_id: u64,
        /// accounts submitted so far
        accounts_done: u64,
        /// batches not yet submitted
        batches_left: u64,
    },
    /// a slice of accounts has been reconciled
    AccountsChecked {
        /// accounts checked so far
        checked: u64,
        /// accounts to check in total
        total: u64,
    },
    /// the wallet unlock failed once and is being retried
    WalletUnlockRetried,
}

/// End-of-run accounting across all stages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// accounts in the index
    pub accounts: u64,
    /// snapshot rows dropped
    pub skipped: u64,
    /// accounts whose observed state mismatched
    pub mismatched: u64,
    /// accounts that could not be read back
    pub read_failures: u64,
    /// batches acknowledged by the backend
    pub batches_confirmed: u64,
    /// batches that failed
    pub batches_failed: u64,
    /// checked sum of the snapshot balances
    pub snapshot_total: Amount,
    /// issued supply read from the chain, when reconciliation ran
    pub chain_supply: Option<Amount>,
}

/// Where engine progress and the final summary are delivered.
pub trait ReportSink: Send + Sync {
    /// reports one progress event
    fn progress(&self, event: ProgressEvent);

    /// reports the final run summary
    fn summary(&self, summary: &RunSummary);
}

/// How one batch submission ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum BatchStatus {
    /// acknowledged by the backend
    Confirmed {
        /// backend transaction id
        transaction_id: String,
    },
    /// rejected or lost; the operations are preserved so the operator can
    /// replay exactly what did not land
    Failed {
        /// failure reason
        reason: String,
        /// full contents of the failed batch
        operations: Vec<Operation>,
    },
}

/// Submission outcome of one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// batch id
    pub batch_id: u64,
    /// account groups packed in the batch
    pub accounts: u64,
    /// how the submission ended
    pub status: BatchStatus,
}

/// Everything the submission stage did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InjectionReport {
    /// per-batch outcomes in batch id order; batches never pulled after a
    /// halt are absent
    pub outcomes: Vec<BatchOutcome>,
    /// accounts in confirmed batches
    pub accounts_submitted: u64,
    /// confirmed batch count
    pub batches_confirmed: u64,
    /// failed batch count
    pub batches_failed: u64,
    /// true when a failure stopped the drain before the queue emptied
    pub halted: bool,
}

impl InjectionReport {
    /// true when every batch was submitted and confirmed
    pub fn is_clean(&self) -> bool {
        !self.halted && self.batches_failed == 0
    }
}

/// What differed on one account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MismatchKind {
    /// account absent on chain
    MissingAccount,
    /// observed total differs from the snapshot balance
    TotalMismatch {
        /// snapshot balance
        expected: Amount,
        /// total observed on chain
        observed: Amount,
    },
    /// spendable part differs
    LiquidMismatch {
        /// liquid part the split assigned
        expected: Amount,
        /// liquid observed on chain
        observed: Amount,
    },
    /// compute stake differs
    CpuStakeMismatch {
        /// cpu stake the split assigned
        expected: Amount,
        /// cpu stake observed on chain
        observed: Amount,
    },
    /// network stake differs
    NetStakeMismatch {
        /// net stake the split assigned
        expected: Amount,
        /// net stake observed on chain
        observed: Amount,
    },
}

/// One reconciliation finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountMismatch {
    /// account concerned
    pub account: AccountName,
    /// what differed
    pub kind: MismatchKind,
}

/// Everything reconciliation found.
///
/// Reports are deterministic: findings are sorted by account name, so two
/// runs against an unchanged chain produce identical reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// per-account findings, sorted by account name
    pub mismatches: Vec<AccountMismatch>,
    /// accounts whose read returned a definitive result, present or absent
    pub checked: u64,
    /// accounts whose read failed
    pub read_failures: u64,
    /// checked sum of the snapshot balances
    pub snapshot_total: Amount,
    /// issued supply read from the chain
    pub chain_supply: Amount,
}

impl ReconciliationReport {
    /// signed difference between the chain supply and the snapshot total, in
    /// raw amount units
    pub fn supply_delta_raw(&self) -> i128 {
        self.chain_supply.to_raw() as i128 - self.snapshot_total.to_raw() as i128
    }

    /// true when every account matched, every read succeeded and the chain
    /// supply equals the snapshot total exactly
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.read_failures == 0 && self.supply_delta_raw() == 0
    }
}
