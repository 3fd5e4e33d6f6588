use jsonrpsee::core::ClientError;
use thiserror::Error;

/// Errors talking to the JSON-RPC endpoint.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The endpoint URL is unusable or the node did not answer `eth_chainId`.
    #[error("failed to connect to RPC endpoint {endpoint}: {source}")]
    Connection {
        /// Endpoint URL as given.
        endpoint: String,
        /// Transport or protocol error.
        #[source]
        source: ClientError,
    },
    /// A call on an established client failed (timeout, transport, node error).
    #[error("{method} failed: {source}")]
    Call {
        /// JSON-RPC method name.
        method: &'static str,
        /// Transport or protocol error.
        #[source]
        source: ClientError,
    },
    /// The node returned `null` for the block.
    #[error("block {0} not found")]
    BlockNotFound(u64),
}
