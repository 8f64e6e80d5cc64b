// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Turns snapshot records into the operation groups that seed them.

use chainseed_launch_exports::{LaunchError, RegistryConfig};
use chainseed_models::config::DEFAULT_PERMISSION;
use chainseed_models::{Operation, OperationAuth, OperationGroup, OperationKind};
use chainseed_snapshot::{AccountRecord, SnapshotIndex};

fn funding_auth(record: &AccountRecord) -> OperationAuth {
    OperationAuth {
        actor: record.funding_account.clone(),
        permission: DEFAULT_PERMISSION.to_string(),
    }
}

/// Builds the seeding group of one record: create the account, buy its
/// ledger storage, lock its bandwidth stake, transfer the liquid part.
///
/// Later operations depend on the earlier ones, so the order is fixed. The
/// transfer is omitted when nothing stays liquid. A record without a public
/// key cannot be seeded; balances-format snapshots carry none.
pub fn build_seeding_group(record: &AccountRecord) -> Result<OperationGroup, LaunchError> {
    let key = record
        .public_key
        .clone()
        .ok_or_else(|| LaunchError::MissingKey(record.name.to_string()))?;
    let mut operations = vec![
        Operation {
            auth: funding_auth(record),
            kind: OperationKind::CreateAccount {
                creator: record.funding_account.clone(),
                name: record.name.clone(),
                owner_key: key.clone(),
                active_key: key,
            },
        },
        Operation {
            auth: funding_auth(record),
            kind: OperationKind::AllocateRam {
                payer: record.funding_account.clone(),
                receiver: record.name.clone(),
                bytes: record.ram_bytes,
            },
        },
        Operation {
            auth: funding_auth(record),
            kind: OperationKind::DelegateStake {
                from: record.funding_account.clone(),
                receiver: record.name.clone(),
                cpu_stake: record.cpu_stake,
                net_stake: record.net_stake,
                transfer: true,
            },
        },
    ];
    if !record.liquid.is_zero() {
        operations.push(Operation {
            auth: funding_auth(record),
            kind: OperationKind::Transfer {
                from: record.funding_account.clone(),
                to: record.name.clone(),
                quantity: record.liquid,
                memo: record.memo.clone(),
            },
        });
    }
    Ok(OperationGroup {
        account: record.name.clone(),
        operations,
    })
}

/// Builds the seeding groups of every indexed account, in name order.
///
/// Fails on the first record without a public key: seeding a snapshot that
/// cannot create its accounts is an operator mistake, not a row to skip.
pub fn build_seeding_groups(index: &SnapshotIndex) -> Result<Vec<OperationGroup>, LaunchError> {
    index
        .iter()
        .map(|(_, record)| build_seeding_group(record))
        .collect()
}

/// Builds one registry write per indexed account, in name order.
///
/// Register-balance runs record each snapshot balance under `snapshot_id`
/// on the registry contract instead of seeding the accounts themselves.
pub fn build_register_groups(
    index: &SnapshotIndex,
    registry: &RegistryConfig,
) -> Vec<OperationGroup> {
    index
        .iter()
        .map(|(_, record)| OperationGroup {
            account: record.name.clone(),
            operations: vec![Operation {
                auth: OperationAuth {
                    actor: registry.actor.clone(),
                    permission: registry.permission.clone(),
                },
                kind: OperationKind::RegisterBalance {
                    registry: registry.registry.clone(),
                    account: record.name.clone(),
                    snapshot_id: registry.snapshot_id,
                    amount: record.raw_balance,
                },
            }],
        })
        .collect()
}
