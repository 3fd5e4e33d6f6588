//! Canonical per-block payload.
//!
//! The payload is ASCII text `"{number}|{state}|{receipts}|{transactions}"`:
//! decimal block number, then the three roots as lowercase hex with no `0x`
//! prefix, joined by `|` with no padding. Consumers of a checkpoint rebuild
//! these exact bytes, so the layout is fixed.

use alloy_primitives::B256;
use regex::Regex;

use crate::header::BlockHeaderDigestInput;
use crate::validation::ValidationError;

/// Field separator. Never appears inside a field: decimal digits and
/// lowercase hex cannot produce it.
pub const PAYLOAD_SEPARATOR: char = '|';

const PAYLOAD_PATTERN: &str =
    r"^(0|[1-9][0-9]*)\|([0-9a-f]{64})\|([0-9a-f]{64})\|([0-9a-f]{64})$";

/// Lowercase hex of a root, without prefix.
pub fn root_hex(root: &B256) -> String {
    hex::encode(root)
}

/// Encoded payload for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPayload(String);

impl CanonicalPayload {
    /// Encodes a header into its canonical payload.
    pub fn encode(header: &BlockHeaderDigestInput) -> Self {
        Self(format!(
            "{}{sep}{}{sep}{}{sep}{}",
            header.number,
            root_hex(&header.state_root),
            root_hex(&header.receipts_root),
            root_hex(&header.transactions_root),
            sep = PAYLOAD_SEPARATOR,
        ))
    }

    /// Parses payload text back into its header fields.
    ///
    /// Only text that [`CanonicalPayload::encode`] could have produced is
    /// accepted: no leading zeros, no prefixes, no uppercase hex.
    pub fn parse(text: &str) -> Result<BlockHeaderDigestInput, ValidationError> {
        let re = Regex::new(PAYLOAD_PATTERN).expect("invalid regex");
        let caps = re
            .captures(text)
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "payload",
                value: text.to_string(),
            })?;

        let number = caps[1]
            .parse::<u64>()
            .map_err(|_| ValidationError::OutOfBounds {
                field: "number",
                value: caps[1].to_string(),
            })?;

        Ok(BlockHeaderDigestInput {
            number,
            state_root: parse_root(&caps[2])?,
            receipts_root: parse_root(&caps[3])?,
            transactions_root: parse_root(&caps[4])?,
        })
    }

    /// Payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Payload bytes as they enter the transcript.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

fn parse_root(value: &str) -> Result<B256, ValidationError> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(value, &mut bytes).map_err(|_| ValidationError::PatternMismatch {
        field: "root",
        value: value.to_string(),
    })?;
    Ok(B256::new(bytes))
}
