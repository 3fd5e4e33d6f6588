use std::fmt;

use alloy_primitives::{Keccak256, B256};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::ValidationError;

/// Keccak-256 commitment, rendered as lowercase hex without a `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment(B256);

impl Commitment {
    /// All-zero value that every transcript starts from.
    pub const ZERO: Self = Self(B256::ZERO);

    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(B256::new(bytes))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }

    /// Lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses the lowercase, unprefixed hex form produced by [`Commitment::to_hex`].
    pub fn from_hex(value: &str) -> Result<Self, ValidationError> {
        let re = Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex");
        if !re.is_match(value) {
            return Err(ValidationError::PatternMismatch {
                field: "commitment",
                value: value.to_string(),
            });
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(value, &mut bytes).map_err(|_| ValidationError::PatternMismatch {
            field: "commitment",
            value: value.to_string(),
        })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl From<B256> for Commitment {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Commitment::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// One hash-chain step: `keccak256(prev || payload)`.
///
/// The previous value is hashed as its raw 32 bytes, immediately followed by
/// the payload bytes with no separator.
pub fn chain_step(prev: &Commitment, payload: &[u8]) -> Commitment {
    let mut hasher = Keccak256::new();
    hasher.update(prev.as_bytes());
    hasher.update(payload);
    Commitment(hasher.finalize())
}
