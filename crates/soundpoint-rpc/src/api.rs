//! The subset of the `eth_` namespace used to build checkpoints.

use alloy_primitives::U64;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

use crate::types::RpcBlockHeader;

/// Chain id, tip height and header lookup.
#[cfg_attr(not(feature = "test-utils"), rpc(client, namespace = "eth"))]
#[cfg_attr(feature = "test-utils", rpc(client, server, namespace = "eth"))]
pub trait EthHeaderApi {
    /// `eth_chainId`.
    #[method(name = "chainId")]
    async fn chain_id(&self) -> RpcResult<U64>;

    /// `eth_blockNumber`: the current tip.
    #[method(name = "blockNumber")]
    async fn block_number(&self) -> RpcResult<U64>;

    /// `eth_getBlockByNumber`; `null` when the node does not know the block.
    #[method(name = "getBlockByNumber")]
    async fn block_by_number(
        &self,
        number: U64,
        full_transactions: bool,
    ) -> RpcResult<Option<RpcBlockHeader>>;
}
