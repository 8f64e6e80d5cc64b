// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Backend account name with the target ledger's identity rules.

use crate::config::MAX_ACCOUNT_NAME_LENGTH;
use crate::error::ModelsError;
use std::str::FromStr;

/// A validated on-chain account identity.
///
/// Names are at most `MAX_ACCOUNT_NAME_LENGTH` characters from the charset
/// `a-z`, `1-5` and `.`, and cannot start or end with a dot. Ordering is the
/// plain string ordering so that indexed account sets iterate
/// deterministically.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AccountName(String);

impl AccountName {
    /// the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountName {
    type Err = ModelsError;

    /// ```
    /// # use chainseed_models::AccountName;
    /// # use std::str::FromStr;
    /// assert!(AccountName::from_str("alice.tf").is_ok());
    /// assert!(AccountName::from_str("gu2tembqgage").is_ok());
    /// assert!(AccountName::from_str("").is_err());
    /// assert!(AccountName::from_str("gu2tembqgage5").is_err());
    /// assert!(AccountName::from_str("Alice").is_err());
    /// assert!(AccountName::from_str(".alice").is_err());
    /// assert!(AccountName::from_str("alice.").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ModelsError::NameParseError("empty account name".into()));
        }
        if s.len() > MAX_ACCOUNT_NAME_LENGTH {
            return Err(ModelsError::NameParseError(format!(
                "account name {} is longer than {} characters",
                s, MAX_ACCOUNT_NAME_LENGTH
            )));
        }
        if !s
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '1'..='5' | '.'))
        {
            return Err(ModelsError::NameParseError(format!(
                "account name {} contains characters outside a-z, 1-5 and '.'",
                s
            )));
        }
        if s.starts_with('.') || s.ends_with('.') {
            return Err(ModelsError::NameParseError(format!(
                "account name {} starts or ends with a dot",
                s
            )));
        }
        Ok(AccountName(s.to_string()))
    }
}

impl ::serde::Serialize for AccountName {
    fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&self.0)
    }
}

impl<'de> ::serde::Deserialize<'de> for AccountName {
    fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<AccountName, D::Error> {
        struct NameVisitor;

        impl<'de> ::serde::de::Visitor<'de> for NameVisitor {
            type Value = AccountName;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an account name of at most 12 characters from a-z, 1-5 and '.'")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: ::serde::de::Error,
            {
                AccountName::from_str(v).map_err(E::custom)
            }
        }
        d.deserialize_str(NameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(AccountName::from_str("a").is_ok());
        assert!(AccountName::from_str("free.tf").is_ok());
        assert!(AccountName::from_str("gu2timbqgage").is_ok());
        // 13 characters
        assert!(AccountName::from_str("gu2timbqgagea").is_err());
        // digits outside 1-5
        assert!(AccountName::from_str("account9").is_err());
        assert!(AccountName::from_str("UPPER").is_err());
        assert!(AccountName::from_str("with space").is_err());
        assert!(AccountName::from_str(".tf").is_err());
        assert!(AccountName::from_str("tf.").is_err());
        // inner dots are legal
        assert!(AccountName::from_str("a.b.c").is_ok());
    }

    #[test]
    fn test_name_ordering_is_string_ordering() {
        let mut names = vec![
            AccountName::from_str("zzz").unwrap(),
            AccountName::from_str("aaa").unwrap(),
            AccountName::from_str("mmm").unwrap(),
        ];
        names.sort();
        let strs: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(strs, vec!["aaa", "mmm", "zzz"]);
    }
}
