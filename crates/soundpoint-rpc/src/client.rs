use std::time::Instant;

use alloy_primitives::U64;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use soundpoint_canonical::BlockHeaderDigestInput;
use soundpoint_core::HeaderSource;
use tracing::{debug, info};

use crate::api::EthHeaderApiClient;
use crate::config::RpcConfig;
use crate::error::RpcError;

/// JSON-RPC handle to one execution-layer node.
///
/// The chain id is read once while connecting; a checkpoint never spans two
/// chains.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: String,
    inner: HttpClient,
    chain_id: u64,
}

impl RpcClient {
    /// Builds the client and validates the endpoint with `eth_chainId`.
    pub async fn connect(endpoint: &str, config: &RpcConfig) -> Result<Self, RpcError> {
        let started = Instant::now();
        let connection_error = |source| RpcError::Connection {
            endpoint: endpoint.to_string(),
            source,
        };

        let inner = HttpClientBuilder::default()
            .request_timeout(config.request_timeout)
            .build(endpoint)
            .map_err(connection_error)?;
        let chain_id = inner
            .chain_id()
            .await
            .map_err(connection_error)?
            .to::<u64>();

        info!(
            endpoint,
            chain_id,
            latency_ms = started.elapsed().as_millis() as u64,
            "connected to RPC endpoint"
        );

        Ok(Self {
            endpoint: endpoint.to_string(),
            inner,
            chain_id,
        })
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Chain id reported at connect time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Current tip height (`eth_blockNumber`).
    pub async fn tip_height(&self) -> Result<u64, RpcError> {
        let tip = self
            .inner
            .block_number()
            .await
            .map_err(|source| RpcError::Call {
                method: "eth_blockNumber",
                source,
            })?;
        Ok(tip.to::<u64>())
    }

    /// Header roots of block `number` (`eth_getBlockByNumber`, no transactions).
    pub async fn fetch_header(&self, number: u64) -> Result<BlockHeaderDigestInput, RpcError> {
        debug!(block = number, "fetching header");
        let block = self
            .inner
            .block_by_number(U64::from(number), false)
            .await
            .map_err(|source| RpcError::Call {
                method: "eth_getBlockByNumber",
                source,
            })?;

        block
            .map(BlockHeaderDigestInput::from)
            .ok_or(RpcError::BlockNotFound(number))
    }
}

impl HeaderSource for RpcClient {
    type Error = RpcError;

    async fn fetch_header(&mut self, number: u64) -> Result<BlockHeaderDigestInput, RpcError> {
        RpcClient::fetch_header(self, number).await
    }
}
