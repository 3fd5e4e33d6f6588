use alloy_primitives::{B256, U64};
use serde::{Deserialize, Serialize};
use soundpoint_canonical::BlockHeaderDigestInput;

/// Header fields read from an `eth_getBlockByNumber` response.
///
/// All other block fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockHeader {
    /// Block number as a hex quantity.
    pub number: U64,
    /// State trie root.
    pub state_root: B256,
    /// Receipts trie root.
    pub receipts_root: B256,
    /// Transactions trie root.
    pub transactions_root: B256,
}

impl From<RpcBlockHeader> for BlockHeaderDigestInput {
    fn from(header: RpcBlockHeader) -> Self {
        Self {
            number: header.number.to::<u64>(),
            state_root: header.state_root,
            receipts_root: header.receipts_root,
            transactions_root: header.transactions_root,
        }
    }
}
