// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

use crate::config::LaunchConfig;
use chainseed_models::config::{
    DEFAULT_TOKEN_SYMBOL, INJECTION_CONCURRENCY, MAX_OPERATIONS_PER_BATCH, RECONCILE_CONCURRENCY,
    TX_BLOCKS_BEHIND, TX_EXPIRE_SECONDS,
};

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            max_operations_per_batch: MAX_OPERATIONS_PER_BATCH,
            injection_concurrency: INJECTION_CONCURRENCY,
            reconcile_concurrency: RECONCILE_CONCURRENCY,
            check_stake_split: false,
            include_pending_refunds: true,
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            blocks_behind: TX_BLOCKS_BEHIND,
            expire_seconds: TX_EXPIRE_SECONDS,
            wallet: None,
            same_actor_delay: None,
            registry: None,
        }
    }
}
