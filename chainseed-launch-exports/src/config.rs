// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Configuration of the launch engine.

use chainseed_models::AccountName;
use std::time::Duration;

/// Wallet session the signer must have open before it can sign submissions.
#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// wallet name
    pub name: String,
    /// wallet password
    pub password: String,
}

/// Settings of a register-balance run, where every account becomes a single
/// registry write instead of a full seeding group.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// registry contract account the balances are recorded on
    pub registry: AccountName,
    /// account authorizing the writes
    pub actor: AccountName,
    /// permission the actor signs with
    pub permission: String,
    /// snapshot id the entries are recorded under
    pub snapshot_id: u64,
}

/// Launch engine configuration.
///
/// Built once per run by the caller; every worker gets it by reference.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    /// hard ceiling on operations packed into one batch
    pub max_operations_per_batch: usize,
    /// number of concurrent submission workers
    pub injection_concurrency: usize,
    /// number of account reads kept in flight during reconciliation
    pub reconcile_concurrency: usize,
    /// compare the on-chain liquid/cpu/net components individually instead
    /// of only the total
    pub check_stake_split: bool,
    /// fold pending stake refunds into the observed total
    pub include_pending_refunds: bool,
    /// symbol of the token being seeded
    pub token_symbol: String,
    /// transaction anchoring offset passed to the backend
    pub blocks_behind: u16,
    /// transaction expiry horizon in seconds
    pub expire_seconds: u16,
    /// wallet session to unlock before submitting, when the signer needs one
    pub wallet: Option<WalletConfig>,
    /// gap enforced between consecutive batches sharing an authorizer
    pub same_actor_delay: Option<Duration>,
    /// registry settings, set only for register-balance runs
    pub registry: Option<RegistryConfig>,
}
