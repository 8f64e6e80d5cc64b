// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Hard-coded protocol and tooling constants.
//!
//! The split thresholds and transaction parameters below are launch-protocol
//! values: changing any of them changes what gets written on chain and is a
//! breaking change. The remaining values are operational defaults picked up
//! by the `Default` implementations of the various configuration objects.

use crate::amount::Amount;

/// Raw fixed-point factor of an `Amount` (10^`AMOUNT_DECIMAL_SCALE`)
pub const AMOUNT_DECIMAL_FACTOR: u64 = 10_000;
/// Number of fractional digits in an `Amount`
pub const AMOUNT_DECIMAL_SCALE: u32 = 4;
/// Maximum length of an on-chain account name
pub const MAX_ACCOUNT_NAME_LENGTH: usize = 12;
/// Length of a public key in printable form
pub const PUBLIC_KEY_LENGTH: usize = 53;

/// Balances at or under this ceiling fall in the lowest liquid tier
pub const LOW_BALANCE_CEILING: Amount = Amount::from_mantissa_scale(3, 0);
/// Balances at or under this ceiling (and over the low one) fall in the middle liquid tier
pub const MID_BALANCE_CEILING: Amount = Amount::from_mantissa_scale(11, 0);
/// Liquid part left on accounts in the lowest tier
pub const LOW_TIER_LIQUID: Amount = Amount::from_mantissa_scale(1, 1);
/// Liquid part left on accounts in the middle tier
pub const MID_TIER_LIQUID: Amount = Amount::from_mantissa_scale(2, 0);
/// Liquid part left on accounts over the middle ceiling
pub const HIGH_TIER_LIQUID: Amount = Amount::from_mantissa_scale(10, 0);

/// Maximum number of operations packed into one submission batch
pub const MAX_OPERATIONS_PER_BATCH: usize = 600;
/// Reference block offset transactions are anchored on
pub const TX_BLOCKS_BEHIND: u16 = 3;
/// Transaction expiry horizon in seconds
pub const TX_EXPIRE_SECONDS: u16 = 30;
/// Ledger storage bought for each created account, in bytes
pub const ACCOUNT_RAM_BYTES: u32 = 4096;
/// Gap enforced between two consecutive submissions authorized by the same account
pub const SAME_ACTOR_DELAY_MILLIS: u64 = 1000;

/// Number of batch submission workers
pub const INJECTION_CONCURRENCY: usize = 1;
/// Number of account state reads kept in flight during reconciliation
pub const RECONCILE_CONCURRENCY: usize = 8;

/// Accounts between two reconciliation progress reports
pub const PROGRESS_ACCOUNT_INTERVAL: u64 = 1000;
/// Batches between two submission progress reports
pub const PROGRESS_BATCH_INTERVAL: u64 = 10;

/// Symbol of the token being seeded
pub const DEFAULT_TOKEN_SYMBOL: &str = "SEED";
/// Audit memo recorded on genesis transfers
pub const DEFAULT_TRANSFER_MEMO: &str = "Genesis";
/// Permission created accounts are controlled through
pub const DEFAULT_PERMISSION: &str = "active";
/// Treasury account funding the seeding operations
pub const DEFAULT_FUNDING_ACCOUNT: &str = "chainseed";
