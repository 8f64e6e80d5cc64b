// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Backend public key carried through the snapshot pipeline.

use crate::config::PUBLIC_KEY_LENGTH;
use crate::error::ModelsError;
use std::str::FromStr;

/// An account public key in the backend's printable form.
///
/// The key is opaque to this tooling: it is validated for shape (exactly
/// `PUBLIC_KEY_LENGTH` alphanumeric characters) and passed through to the
/// account creation operation unchanged. Signing never happens here.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct PublicKey(String);

impl PublicKey {
    /// the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublicKey {
    type Err = ModelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PUBLIC_KEY_LENGTH {
            return Err(ModelsError::KeyParseError(format!(
                "public key must be {} characters, got {}",
                PUBLIC_KEY_LENGTH,
                s.len()
            )));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ModelsError::KeyParseError(
                "public key contains non-alphanumeric characters".to_string(),
            ));
        }
        Ok(PublicKey(s.to_string()))
    }
}

impl ::serde::Serialize for PublicKey {
    fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&self.0)
    }
}

impl<'de> ::serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<PublicKey, D::Error> {
        struct KeyVisitor;

        impl<'de> ::serde::de::Visitor<'de> for KeyVisitor {
            type Value = PublicKey;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a 53 character alphanumeric public key")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: ::serde::de::Error,
            {
                PublicKey::from_str(v).map_err(E::custom)
            }
        }
        d.deserialize_str(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        let good = "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV";
        assert_eq!(good.len(), 53);
        assert!(PublicKey::from_str(good).is_ok());
        // one character short
        assert!(PublicKey::from_str(&good[..52]).is_err());
        // one character long
        assert!(PublicKey::from_str(&format!("{}V", good)).is_err());
        assert!(PublicKey::from_str(&format!("{}#", &good[..52])).is_err());
        assert!(PublicKey::from_str("").is_err());
    }
}
