// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! The balance splitting policy applied to every snapshot account.

use crate::error::SnapshotError;
use chainseed_models::config::{
    HIGH_TIER_LIQUID, LOW_BALANCE_CEILING, LOW_TIER_LIQUID, MID_BALANCE_CEILING, MID_TIER_LIQUID,
};
use chainseed_models::Amount;

/// The three-way decomposition of a snapshot balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceSplit {
    /// part left spendable
    pub liquid: Amount,
    /// part locked as compute bandwidth stake
    pub cpu_stake: Amount,
    /// part locked as network bandwidth stake
    pub net_stake: Amount,
}

/// Splits a rounded snapshot balance into its liquid and stake parts.
///
/// The liquid part is fixed by the balance tier: `LOW_TIER_LIQUID` up to
/// `LOW_BALANCE_CEILING` inclusive, `MID_TIER_LIQUID` up to
/// `MID_BALANCE_CEILING` inclusive, `HIGH_TIER_LIQUID` above. The remainder
/// is halved between cpu and net stake on the 4-decimal grid, cpu taking the
/// odd raw unit, so the three parts always sum back to the input exactly.
///
/// Balances that cannot cover their tier's liquid part are a data integrity
/// problem and are rejected rather than clamped.
pub fn split_balance(raw_balance: Amount) -> Result<BalanceSplit, SnapshotError> {
    let liquid = if raw_balance <= LOW_BALANCE_CEILING {
        LOW_TIER_LIQUID
    } else if raw_balance <= MID_BALANCE_CEILING {
        MID_TIER_LIQUID
    } else {
        HIGH_TIER_LIQUID
    };
    let remainder = raw_balance
        .checked_sub(liquid)
        .ok_or(SnapshotError::RemainderUnderflow(raw_balance))?;
    let (cpu_stake, net_stake) = remainder.halved_up();
    Ok(BalanceSplit {
        liquid,
        cpu_stake,
        net_stake,
    })
}
