// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Ledger operations produced for one snapshot account, and the batches they
//! are packed into for submission.

use crate::amount::Amount;
use crate::key::PublicKey;
use crate::name::AccountName;
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Actor and permission authorizing an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationAuth {
    /// authorizing account
    pub actor: AccountName,
    /// permission level the actor signs with
    pub permission: String,
}

/// A single state-mutating ledger operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// authorization the backend checks the signature against
    pub auth: OperationAuth,
    /// what the operation does
    #[serde(flatten)]
    pub kind: OperationKind,
}

/// The concrete effect of an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationKind {
    /// register a new account under `name` with its key pair
    CreateAccount {
        /// existing account paying for the creation
        creator: AccountName,
        /// account being created
        name: AccountName,
        /// key controlling the owner permission
        owner_key: PublicKey,
        /// key controlling the active permission
        active_key: PublicKey,
    },
    /// buy a fixed byte quantity of ledger storage for `receiver`
    AllocateRam {
        /// account paying for the storage
        payer: AccountName,
        /// account receiving the storage
        receiver: AccountName,
        /// storage quantity in bytes
        bytes: u32,
    },
    /// lock bandwidth stake on `receiver`
    DelegateStake {
        /// account the stake is taken from
        from: AccountName,
        /// account the stake is locked on
        receiver: AccountName,
        /// compute bandwidth stake
        cpu_stake: Amount,
        /// network bandwidth stake
        net_stake: Amount,
        /// when true the stake ownership moves to the receiver
        transfer: bool,
    },
    /// move liquid tokens from `from` to `to`
    Transfer {
        /// sending account
        from: AccountName,
        /// receiving account
        to: AccountName,
        /// liquid quantity moved
        quantity: Amount,
        /// audit tag recorded with the transfer
        memo: String,
    },
    /// record an account balance in an on-chain registry contract
    RegisterBalance {
        /// registry contract account
        registry: AccountName,
        /// account the balance belongs to
        account: AccountName,
        /// registry table the entry is written under
        snapshot_id: u64,
        /// recorded balance
        amount: Amount,
    },
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::CreateAccount { creator, name, .. } => {
                write!(f, "create account {} (creator {})", name, creator)
            }
            OperationKind::AllocateRam {
                receiver, bytes, ..
            } => {
                write!(f, "allocate {} ram bytes for {}", bytes, receiver)
            }
            OperationKind::DelegateStake {
                receiver,
                cpu_stake,
                net_stake,
                ..
            } => {
                write!(
                    f,
                    "delegate cpu {} net {} to {}",
                    cpu_stake, net_stake, receiver
                )
            }
            OperationKind::Transfer { to, quantity, .. } => {
                write!(f, "transfer {} to {}", quantity, to)
            }
            OperationKind::RegisterBalance {
                account, amount, ..
            } => {
                write!(f, "register balance {} for {}", amount, account)
            }
        }
    }
}

/// The ordered operations seeding one account.
///
/// A group is the atomic planning unit: the batcher never places its
/// operations in two different batches, since later operations depend on the
/// earlier ones having executed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationGroup {
    /// account the group seeds
    pub account: AccountName,
    /// operations in execution order
    pub operations: Vec<Operation>,
}

impl OperationGroup {
    /// number of operations in the group
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// true when the group carries no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A sealed set of operations submitted as one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// position of the batch in submission order, starting at 0
    pub id: u64,
    /// number of account groups packed into the batch
    pub accounts: u64,
    /// packed operations, group order preserved
    pub operations: Vec<Operation>,
}

impl Batch {
    /// number of operations in the batch
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// true when the batch carries no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// actor of the first operation, the authorizer the backend rate-limits
    /// on when every operation in the batch shares one actor
    pub fn primary_authorizer(&self) -> Option<&AccountName> {
        self.operations.first().map(|op| &op.auth.actor)
    }
}
