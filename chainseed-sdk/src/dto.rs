// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Wire shapes of the node responses the launch tooling consumes.
//!
//! Balances travel as asset strings (`"2.0000 SEED"`); parsing verifies the
//! symbol before converting the quantity, so a node configured for another
//! token fails loudly instead of reconciling garbage.

use chainseed_launch_exports::{AccountState, ClientError, PendingRefund};
use chainseed_models::Amount;
use serde::Deserialize;
use std::str::FromStr;

/// Parses an asset string carrying `symbol` into an `Amount`.
pub fn parse_asset(text: &str, symbol: &str) -> Result<Amount, ClientError> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(quantity), Some(sym), None) if sym == symbol => {
            Amount::from_str(quantity).map_err(|err| {
                ClientError::Rejected(format!("malformed asset quantity {:?}: {}", text, err))
            })
        }
        _ => Err(ClientError::Rejected(format!(
            "asset {:?} does not carry the expected symbol {}",
            text, symbol
        ))),
    }
}

fn parse_optional_asset(
    text: Option<&String>,
    symbol: &str,
) -> Result<Option<Amount>, ClientError> {
    text.map(|text| parse_asset(text, symbol)).transpose()
}

/// Receipt of an accepted transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct TransactionReceiptDto {
    /// backend transaction id
    pub transaction_id: String,
}

/// Bandwidth stake locked on an account by itself.
#[derive(Clone, Debug, Deserialize)]
pub struct BandwidthDto {
    /// compute stake asset string
    pub cpu_weight: String,
    /// network stake asset string
    pub net_weight: String,
}

/// An unstake refund the backend has scheduled but not paid out yet.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RefundDto {
    /// compute stake coming back, absent when none
    #[serde(default)]
    pub cpu_amount: Option<String>,
    /// network stake coming back, absent when none
    #[serde(default)]
    pub net_amount: Option<String>,
}

/// Account state as the node reports it.
///
/// The node omits components an account never had, hence the options.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccountDto {
    /// spendable balance asset string
    #[serde(default)]
    pub core_liquid_balance: Option<String>,
    /// stake the account delegated to itself
    #[serde(default)]
    pub self_delegated_bandwidth: Option<BandwidthDto>,
    /// refund in flight, when one exists
    #[serde(default)]
    pub refund_request: Option<RefundDto>,
}

impl AccountDto {
    /// Converts the wire shape into the engine's `AccountState`, verifying
    /// every asset string against `symbol`.
    pub fn into_state(self, symbol: &str) -> Result<AccountState, ClientError> {
        let liquid = parse_optional_asset(self.core_liquid_balance.as_ref(), symbol)?;
        let (cpu_weight, net_weight) = match &self.self_delegated_bandwidth {
            Some(bandwidth) => (
                Some(parse_asset(&bandwidth.cpu_weight, symbol)?),
                Some(parse_asset(&bandwidth.net_weight, symbol)?),
            ),
            None => (None, None),
        };
        let refund = match &self.refund_request {
            Some(refund) => Some(PendingRefund {
                cpu: parse_optional_asset(refund.cpu_amount.as_ref(), symbol)?
                    .unwrap_or_default(),
                net: parse_optional_asset(refund.net_amount.as_ref(), symbol)?
                    .unwrap_or_default(),
            }),
            None => None,
        };
        Ok(AccountState {
            liquid,
            cpu_weight,
            net_weight,
            refund,
        })
    }
}

/// Aggregate figures of a token, keyed off the currency stats table.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrencyStatsDto {
    /// total issued supply asset string
    pub supply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asset() {
        assert_eq!(
            parse_asset("2.0000 SEED", "SEED").unwrap(),
            Amount::from_str("2").unwrap()
        );
        assert_eq!(
            parse_asset("  123.4567 SEED ", "SEED").unwrap(),
            Amount::from_str("123.4567").unwrap()
        );
        // wrong symbol, missing symbol, trailing junk, bad quantity
        assert!(parse_asset("2.0000 OTHR", "SEED").is_err());
        assert!(parse_asset("2.0000", "SEED").is_err());
        assert!(parse_asset("2.0000 SEED extra", "SEED").is_err());
        assert!(parse_asset("nope SEED", "SEED").is_err());
    }

    #[test]
    fn test_full_account_state() {
        let dto: AccountDto = serde_json::from_value(serde_json::json!({
            "account_name": "alice",
            "core_liquid_balance": "2.0000 SEED",
            "self_delegated_bandwidth": {
                "from": "alice",
                "to": "alice",
                "cpu_weight": "1.5000 SEED",
                "net_weight": "1.5000 SEED"
            },
            "refund_request": {
                "cpu_amount": "0.5000 SEED",
                "net_amount": "0.2500 SEED"
            }
        }))
        .unwrap();
        let state = dto.into_state("SEED").unwrap();
        assert_eq!(state.liquid, Some(Amount::from_str("2").unwrap()));
        assert_eq!(state.cpu_weight, Some(Amount::from_str("1.5").unwrap()));
        assert_eq!(state.net_weight, Some(Amount::from_str("1.5").unwrap()));
        let refund = state.refund.unwrap();
        assert_eq!(refund.cpu, Amount::from_str("0.5").unwrap());
        assert_eq!(refund.net, Amount::from_str("0.25").unwrap());
    }

    #[test]
    fn test_omitted_components_stay_absent() {
        let dto: AccountDto =
            serde_json::from_value(serde_json::json!({ "account_name": "alice" })).unwrap();
        let state = dto.into_state("SEED").unwrap();
        assert_eq!(state.liquid, None);
        assert_eq!(state.cpu_weight, None);
        assert_eq!(state.net_weight, None);
        assert!(state.refund.is_none());
    }

    #[test]
    fn test_wrong_symbol_is_an_error_not_a_zero() {
        let dto: AccountDto = serde_json::from_value(serde_json::json!({
            "core_liquid_balance": "2.0000 OTHR"
        }))
        .unwrap();
        assert!(dto.into_state("SEED").is_err());
    }
}
