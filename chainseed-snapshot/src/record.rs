// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! The per-account record an index is made of.

use chainseed_models::config::{ACCOUNT_RAM_BYTES, DEFAULT_FUNDING_ACCOUNT, DEFAULT_TRANSFER_MEMO};
use chainseed_models::{AccountName, Amount, PublicKey};
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

/// One snapshot account with its balance decomposition.
///
/// Everything except `observed_total` is fixed when the index is built;
/// `observed_total` is written once by reconciliation and never overwrites
/// the snapshot-derived fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    /// on-chain identity
    pub name: AccountName,
    /// account key, absent in balances-format rows
    pub public_key: Option<PublicKey>,
    /// snapshot balance rounded onto the 4-decimal grid
    pub raw_balance: Amount,
    /// part left spendable
    pub liquid: Amount,
    /// part locked as compute bandwidth stake
    pub cpu_stake: Amount,
    /// part locked as network bandwidth stake
    pub net_stake: Amount,
    /// ledger storage bought at creation, in bytes
    pub ram_bytes: u32,
    /// audit memo recorded on the genesis transfer
    pub memo: String,
    /// treasury account funding this account's seeding operations
    pub funding_account: AccountName,
    /// total observed on chain during reconciliation
    pub observed_total: Option<Amount>,
}

/// Row interpretation settings used while building an index.
#[derive(Clone, Debug)]
pub struct SnapshotSettings {
    /// ledger storage bought for each created account, in bytes
    pub ram_bytes: u32,
    /// audit memo recorded on genesis transfers
    pub memo: String,
    /// treasury account funding the seeding operations
    pub funding_account: AccountName,
    /// accounts whose derivation is logged in full
    pub debug_names: BTreeSet<AccountName>,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        SnapshotSettings {
            ram_bytes: ACCOUNT_RAM_BYTES,
            memo: DEFAULT_TRANSFER_MEMO.to_string(),
            funding_account: AccountName::from_str(DEFAULT_FUNDING_ACCOUNT).unwrap(),
            debug_names: BTreeSet::new(),
        }
    }
}
