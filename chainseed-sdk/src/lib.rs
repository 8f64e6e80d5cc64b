// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! JSON-RPC node client for the chainseed launch tooling.
//!
//! `RpcClient` implements the `ChainClient` trait from
//! chainseed-launch-exports over a jsonrpsee HTTP connection: one method per
//! consumed node call, typed requests and responses, and asset strings
//! parsed into `Amount` on the way in. The engine above never sees JSON.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use async_trait::async_trait;
use chainseed_launch_exports::{
    AccountState, ChainClient, ClientError, SubmitOptions, TransactionAck,
};
use chainseed_models::config::DEFAULT_TOKEN_SYMBOL;
use chainseed_models::{AccountName, Amount, Operation};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::client::Error as JsonRpseeError;
use jsonrpsee::rpc_params;
use jsonrpsee_http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;
use tracing::debug;

mod dto;

pub use dto::{parse_asset, AccountDto, BandwidthDto, CurrencyStatsDto, RefundDto};

/// Connection settings of the node client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// node RPC endpoint, e.g. `http://127.0.0.1:8890`
    pub endpoint: String,
    /// per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// symbol every asset string from the node must carry
    pub token_symbol: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: "http://127.0.0.1:8890".to_string(),
            request_timeout_ms: 10_000,
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
        }
    }
}

/// HTTP client for the node RPC surface.
pub struct RpcClient {
    http: HttpClient,
    token_symbol: String,
}

impl RpcClient {
    /// Builds a client for the configured endpoint.
    pub fn new(config: &ClientConfig) -> Result<RpcClient, ClientError> {
        let http = HttpClientBuilder::default()
            .request_timeout(Duration::from_millis(config.request_timeout_ms))
            .build(&config.endpoint)
            .map_err(|err| {
                ClientError::Transport(format!(
                    "could not set up a client for {}: {}",
                    config.endpoint, err
                ))
            })?;
        Ok(RpcClient {
            http,
            token_symbol: config.token_symbol.clone(),
        })
    }
}

/// Maps a jsonrpsee failure onto the engine's error taxonomy: a call error
/// is a backend rejection, everything else never reached the backend.
fn map_error(err: JsonRpseeError) -> ClientError {
    match err {
        JsonRpseeError::Call(obj) => {
            ClientError::Rejected(format!("{} (code {})", obj.message(), obj.code()))
        }
        JsonRpseeError::RequestTimeout => {
            ClientError::Transport("request timed out".to_string())
        }
        other => ClientError::Transport(other.to_string()),
    }
}

/// Call errors the node raises for an account it does not know.
fn is_unknown_account(err: &JsonRpseeError) -> bool {
    match err {
        JsonRpseeError::Call(obj) => obj.message().to_lowercase().contains("unknown account"),
        _ => false,
    }
}

#[async_trait]
impl ChainClient for RpcClient {
    async fn submit(
        &self,
        operations: &[Operation],
        opts: &SubmitOptions,
    ) -> Result<TransactionAck, ClientError> {
        debug!("pushing a transaction of {} operations", operations.len());
        let receipt: dto::TransactionReceiptDto = self
            .http
            .request(
                "chain_push_transaction",
                rpc_params![operations, opts.blocks_behind, opts.expire_seconds],
            )
            .await
            .map_err(map_error)?;
        Ok(TransactionAck {
            transaction_id: receipt.transaction_id,
        })
    }

    async fn get_account_state(
        &self,
        name: &AccountName,
    ) -> Result<AccountState, ClientError> {
        let account: AccountDto = self
            .http
            .request("chain_get_account", rpc_params![name])
            .await
            .map_err(|err| {
                if is_unknown_account(&err) {
                    ClientError::UnknownAccount(name.to_string())
                } else {
                    map_error(err)
                }
            })?;
        account.into_state(&self.token_symbol)
    }

    async fn get_issued_supply(&self, symbol: &str) -> Result<Amount, ClientError> {
        let stats: dto::CurrencyStatsDto = self
            .http
            .request("chain_get_currency_stats", rpc_params![symbol])
            .await
            .map_err(map_error)?;
        parse_asset(&stats.supply, symbol)
    }

    async fn unlock_wallet(&self, wallet: &str, password: &str) -> Result<(), ClientError> {
        self.http
            .request("wallet_unlock", rpc_params![wallet, password])
            .await
            .map_err(map_error)
    }
}
