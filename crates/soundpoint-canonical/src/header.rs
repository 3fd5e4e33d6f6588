use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// The three header roots of one sampled block.
///
/// Roots are opaque 32-byte strings here; nothing checks them against
/// consensus rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeaderDigestInput {
    /// Block number.
    pub number: u64,
    /// State trie root.
    pub state_root: B256,
    /// Receipts trie root.
    pub receipts_root: B256,
    /// Transactions trie root.
    pub transactions_root: B256,
}
