// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Build here the default tool settings from the configuration file toml

use chainseed_models::config::{
    build_chainseed_settings, ACCOUNT_RAM_BYTES, DEFAULT_FUNDING_ACCOUNT, DEFAULT_PERMISSION,
    DEFAULT_TOKEN_SYMBOL, DEFAULT_TRANSFER_MEMO, INJECTION_CONCURRENCY, MAX_OPERATIONS_PER_BATCH,
    RECONCILE_CONCURRENCY, TX_BLOCKS_BEHIND, TX_EXPIRE_SECONDS,
};
use serde::Deserialize;

lazy_static::lazy_static! {
    pub static ref SETTINGS: Settings = build_chainseed_settings("chainseed-cli", "CHAINSEED_CLI");
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub node: NodeSettings,
    pub launch: LaunchSettings,
    pub snapshot: SnapshotFileSettings,
    pub wallet: Option<WalletSettings>,
    pub registry: Option<RegistrySettings>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NodeSettings {
    pub endpoint: String,
    pub request_timeout_ms: u64,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8890".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LaunchSettings {
    pub max_operations_per_batch: usize,
    pub injection_concurrency: usize,
    pub reconcile_concurrency: usize,
    pub check_stake_split: bool,
    pub include_pending_refunds: bool,
    pub token_symbol: String,
    pub blocks_behind: u16,
    pub expire_seconds: u16,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            max_operations_per_batch: MAX_OPERATIONS_PER_BATCH,
            injection_concurrency: INJECTION_CONCURRENCY,
            reconcile_concurrency: RECONCILE_CONCURRENCY,
            check_stake_split: false,
            include_pending_refunds: true,
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            blocks_behind: TX_BLOCKS_BEHIND,
            expire_seconds: TX_EXPIRE_SECONDS,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SnapshotFileSettings {
    pub ram_bytes: u32,
    pub memo: String,
    pub treasury: String,
}

impl Default for SnapshotFileSettings {
    fn default() -> Self {
        Self {
            ram_bytes: ACCOUNT_RAM_BYTES,
            memo: DEFAULT_TRANSFER_MEMO.to_string(),
            treasury: DEFAULT_FUNDING_ACCOUNT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WalletSettings {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistrySettings {
    pub registry: String,
    pub actor: String,
    #[serde(default = "default_registry_permission")]
    pub permission: String,
    pub snapshot_id: u64,
}

fn default_registry_permission() -> String {
    DEFAULT_PERMISSION.to_string()
}

#[cfg(test)]
#[test]
fn test_load_cli_config() {
    let _ = *SETTINGS;
}
