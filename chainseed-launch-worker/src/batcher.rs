// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Packs operation groups into submission batches.

use chainseed_models::{Batch, Operation, OperationGroup};
use tracing::warn;

/// Packs the groups into batches of at most `max_operations` operations,
/// preserving group order and never splitting a group.
///
/// Groups are drained in sequence: when the next group does not fit, the
/// pending batch is sealed and a new one starts. A single group larger than
/// the cap still rides alone in an over-cap batch, since splitting it would
/// break the in-transaction ordering its operations rely on.
pub fn pack_batches(groups: Vec<OperationGroup>, max_operations: usize) -> Vec<Batch> {
    let mut batches: Vec<Batch> = Vec::new();
    let mut pending_ops: Vec<Operation> = Vec::new();
    let mut pending_accounts: u64 = 0;
    let mut next_id: u64 = 0;

    for group in groups {
        if group.is_empty() {
            continue;
        }
        if group.len() > max_operations {
            warn!(
                "group for {} holds {} operations, above the cap of {}, batching it alone",
                group.account,
                group.len(),
                max_operations
            );
        }
        if !pending_ops.is_empty() && pending_ops.len() + group.len() > max_operations {
            batches.push(Batch {
                id: next_id,
                accounts: pending_accounts,
                operations: std::mem::take(&mut pending_ops),
            });
            next_id += 1;
            pending_accounts = 0;
        }
        pending_accounts += 1;
        pending_ops.extend(group.operations);
    }
    if !pending_ops.is_empty() {
        batches.push(Batch {
            id: next_id,
            accounts: pending_accounts,
            operations: pending_ops,
        });
    }
    batches
}
