// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! The interface between the launch engine and the node.

use crate::error::ClientError;
use async_trait::async_trait;
use chainseed_models::config::{TX_BLOCKS_BEHIND, TX_EXPIRE_SECONDS};
use chainseed_models::{AccountName, Amount, Operation};
use serde::{Deserialize, Serialize};

/// Backend parameters controlling how a submitted transaction anchors and
/// expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOptions {
    /// how many blocks behind the head the transaction references
    pub blocks_behind: u16,
    /// seconds before an unconfirmed transaction expires
    pub expire_seconds: u16,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        SubmitOptions {
            blocks_behind: TX_BLOCKS_BEHIND,
            expire_seconds: TX_EXPIRE_SECONDS,
        }
    }
}

/// Acknowledgement returned by the backend for an accepted transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAck {
    /// backend transaction id
    pub transaction_id: String,
}

/// A stake refund the backend has scheduled but not yet paid out.
///
/// Stake undelegated between injection and reconciliation sits here; the
/// tokens still belong to the account and count toward its observed total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingRefund {
    /// compute stake coming back
    pub cpu: Amount,
    /// network stake coming back
    pub net: Amount,
}

/// On-chain balance components of one account, as read during
/// reconciliation. Backends omit components that were never set; a missing
/// component counts as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountState {
    /// spendable balance
    pub liquid: Option<Amount>,
    /// compute bandwidth stake
    pub cpu_weight: Option<Amount>,
    /// network bandwidth stake
    pub net_weight: Option<Amount>,
    /// refund in flight, when one exists
    pub refund: Option<PendingRefund>,
}

/// Interface to the node consumed by the launch engine.
///
/// Implementations own the transport and everything below the operation
/// level (serialization, signing delegation, connection handling); the
/// engine only sees typed calls. `submit` must not return before the backend
/// acknowledged or rejected the transaction.
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// submits operations as one transaction and waits for the backend ack
    async fn submit(
        &self,
        operations: &[Operation],
        opts: &SubmitOptions,
    ) -> Result<TransactionAck, ClientError>;

    /// reads the balance components of an account
    async fn get_account_state(&self, name: &AccountName)
        -> Result<AccountState, ClientError>;

    /// reads the total issued supply of `symbol`
    async fn get_issued_supply(&self, symbol: &str) -> Result<Amount, ClientError>;

    /// unlocks a named wallet session on the signer
    async fn unlock_wallet(&self, wallet: &str, password: &str) -> Result<(), ClientError>;
}
