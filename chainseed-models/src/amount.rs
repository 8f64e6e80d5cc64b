// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Fixed-point token amount with the 4-decimal precision of the target
//! ledger's asset type.

use crate::config::{AMOUNT_DECIMAL_FACTOR, AMOUNT_DECIMAL_SCALE};
use crate::ModelsError;
use rust_decimal::prelude::*;
use serde::de::Unexpected;
use std::fmt;
use std::str::FromStr;

/// A structure representing a decimal Amount of coins with safe operations
/// this allows ensuring that there is never an uncontrolled overflow or precision loss
/// while providing a convenient decimal interface for users
/// The underlying `u64` raw representation is a fixed-point value with factor `AMOUNT_DECIMAL_FACTOR`
/// The minimal value is 0 and the maximal value is 1844674407370955.1615
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Default)]
pub struct Amount(u64);

impl Amount {
    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Obtains the underlying raw `u64` representation
    /// Warning: do not use this unless you know what you are doing
    /// because the raw value does not take the `AMOUNT_DECIMAL_FACTOR` into account.
    pub const fn to_raw(&self) -> u64 {
        self.0
    }

    /// constructs an `Amount` from the underlying raw `u64` representation
    /// Warning: do not use this unless you know what you are doing
    /// because the raw value does not take the `AMOUNT_DECIMAL_FACTOR` into account
    /// In most cases, you should be using `Amount::from_str("11.23")`
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Constructs an `Amount` from a mantissa and a scale where
    /// `amount = mantissa * 10^(-scale)`.
    /// This function panics on any error and is meant for constant values.
    /// ```
    /// # use chainseed_models::Amount;
    /// # use std::str::FromStr;
    /// let amount = Amount::from_mantissa_scale(1, 1);
    /// assert_eq!(amount, Amount::from_str("0.1").unwrap());
    /// ```
    pub const fn from_mantissa_scale(mantissa: u64, scale: u32) -> Self {
        if scale > AMOUNT_DECIMAL_SCALE {
            panic!("amounts cannot be more precise than 1/10000");
        }
        let amplifier = 10u64.pow(AMOUNT_DECIMAL_SCALE - scale);
        match mantissa.checked_mul(amplifier) {
            Some(raw) => Amount(raw),
            None => panic!("amount mantissa is too large"),
        }
    }

    /// returns true if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// safely add self to another amount, saturating the result on overflow
    #[must_use]
    pub fn saturating_add(self, amount: Amount) -> Self {
        Amount(self.0.saturating_add(amount.0))
    }

    /// safely subtract another amount from self, saturating the result on underflow
    #[must_use]
    pub fn saturating_sub(self, amount: Amount) -> Self {
        Amount(self.0.saturating_sub(amount.0))
    }

    /// safely subtract another amount from self, returning None on underflow
    /// ```
    /// # use chainseed_models::Amount;
    /// # use std::str::FromStr;
    /// let amount_1: Amount = Amount::from_str("42").unwrap();
    /// let amount_2: Amount = Amount::from_str("7").unwrap();
    /// let res: Amount = amount_1.checked_sub(amount_2).unwrap();
    /// assert_eq!(res, Amount::from_str("35").unwrap())
    /// ```
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        self.0.checked_sub(amount.0).map(Amount)
    }

    /// safely add self to another amount, returning None on overflow
    /// ```
    /// # use chainseed_models::Amount;
    /// # use std::str::FromStr;
    /// let amount_1: Amount = Amount::from_str("42").unwrap();
    /// let amount_2: Amount = Amount::from_str("7").unwrap();
    /// let res: Amount = amount_1.checked_add(amount_2).unwrap();
    /// assert_eq!(res, Amount::from_str("49").unwrap())
    /// ```
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Amount)
    }

    /// Splits the amount into two parts whose sum is exactly `self`.
    /// The first part is `self / 2` rounded half away from zero on the
    /// 4-decimal grid: when the raw value is odd it receives the extra unit.
    /// ```
    /// # use chainseed_models::Amount;
    /// # use std::str::FromStr;
    /// let (first, second) = Amount::from_str("2.9999").unwrap().halved_up();
    /// assert_eq!(first, Amount::from_str("1.5").unwrap());
    /// assert_eq!(second, Amount::from_str("1.4999").unwrap());
    /// ```
    #[must_use]
    pub const fn halved_up(self) -> (Self, Self) {
        let first = self.0 / 2 + self.0 % 2;
        (Amount(first), Amount(self.0 - first))
    }

    /// Builds an Amount from a decimal string like `from_str`, but rounds
    /// half away from zero to the 4-decimal grid instead of rejecting extra
    /// fractional digits. Only meant for the snapshot boundary, where source
    /// precision can exceed the ledger precision.
    /// ```
    /// # use chainseed_models::Amount;
    /// # use std::str::FromStr;
    /// let rounded = Amount::from_str_rounded("11.00005").unwrap();
    /// assert_eq!(rounded, Amount::from_str("11.0001").unwrap());
    /// assert!(Amount::from_str("11.00005").is_err());
    /// ```
    pub fn from_str_rounded(str_amount: &str) -> Result<Self, ModelsError> {
        let dec = Amount::parse_decimal(str_amount)?
            .round_dp_with_strategy(AMOUNT_DECIMAL_SCALE, RoundingStrategy::MidpointAwayFromZero);
        Amount::try_from_decimal(dec)
    }

    /// parses a plain decimal string; `Decimal` itself accepts exponent
    /// forms like `1e3`, which the ledger's asset strings never use
    fn parse_decimal(str_amount: &str) -> Result<Decimal, ModelsError> {
        if str_amount.contains(['e', 'E']) {
            return Err(ModelsError::AmountParseError(
                "amounts cannot use exponent notation".to_string(),
            ));
        }
        Decimal::from_str(str_amount).map_err(|err| ModelsError::AmountParseError(err.to_string()))
    }

    /// converts a parsed `Decimal` into the raw fixed-point representation
    fn try_from_decimal(dec: Decimal) -> Result<Self, ModelsError> {
        let res = dec
            .checked_mul(AMOUNT_DECIMAL_FACTOR.into())
            .ok_or_else(|| ModelsError::AmountParseError("amount is too large".to_string()))?;
        if res.is_sign_negative() {
            return Err(ModelsError::AmountParseError(
                "amounts cannot be strictly negative".to_string(),
            ));
        }
        if !res.fract().is_zero() {
            return Err(ModelsError::AmountParseError(format!(
                "amounts cannot be more precise than 1/{}",
                AMOUNT_DECIMAL_FACTOR
            )));
        }
        let res = res.to_u64().ok_or_else(|| {
            ModelsError::AmountParseError(
                "amount is too large to be represented as u64".to_string(),
            )
        })?;
        Ok(Amount(res))
    }
}

/// display an Amount in decimal string form with the full 4-digit fractional
/// part, matching the backend's fixed-width asset rendering
///
/// ```
/// # use chainseed_models::Amount;
/// # use std::str::FromStr;
/// let value = Amount::from_str("2").unwrap();
/// assert_eq!(format!("{}", value), "2.0000")
/// ```
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:04}",
            self.0 / AMOUNT_DECIMAL_FACTOR,
            self.0 % AMOUNT_DECIMAL_FACTOR
        )
    }
}

/// build an Amount from decimal string form (like "10.33")
/// note that this will fail if the string format is invalid
/// or if the conversion would cause an overflow, underflow or precision loss
///
/// ```
/// # use chainseed_models::Amount;
/// # use std::str::FromStr;
/// assert!(Amount::from_str("11.1").is_ok());
/// assert!(Amount::from_str("11.11111").is_err());
/// assert!(Amount::from_str("11111111111111111111111").is_err());
/// assert!(Amount::from_str("-11.1").is_err());
/// assert!(Amount::from_str("abc").is_err());
/// ```
impl FromStr for Amount {
    type Err = ModelsError;

    fn from_str(str_amount: &str) -> Result<Self, Self::Err> {
        Amount::try_from_decimal(Amount::parse_decimal(str_amount)?)
    }
}

impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> serde::de::Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn visit_str<E>(self, value: &str) -> Result<Amount, E>
    where
        E: serde::de::Error,
    {
        Amount::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an Amount type representing a fixed-point currency amount"
        )
    }
}

impl serde::Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
