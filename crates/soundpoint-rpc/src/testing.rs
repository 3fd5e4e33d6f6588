//! In-process JSON-RPC node for tests.
//!
//! Serves `eth_chainId`, `eth_blockNumber` and `eth_getBlockByNumber` for a
//! synthetic chain whose header roots are derived from the block number, with
//! injectable per-block failures.

use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use alloy_primitives::{keccak256, U64};
use jsonrpsee::core::{async_trait, RpcResult};
use jsonrpsee::server::{ServerBuilder, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use soundpoint_canonical::BlockHeaderDigestInput;

use crate::api::EthHeaderApiServer;
use crate::types::RpcBlockHeader;

/// JSON-RPC error code returned for injected failures.
pub const INJECTED_FAILURE_CODE: i32 = -32000;

/// Synthetic chain served by [`MockNode`].
#[derive(Debug, Clone)]
pub struct MockChain {
    chain_id: u64,
    tip: u64,
    failing: BTreeSet<u64>,
    missing: BTreeSet<u64>,
    requests: Arc<Mutex<Vec<u64>>>,
}

impl MockChain {
    /// Chain with blocks `0..=tip`.
    pub fn new(chain_id: u64, tip: u64) -> Self {
        Self {
            chain_id,
            tip,
            failing: BTreeSet::new(),
            missing: BTreeSet::new(),
            requests: Arc::default(),
        }
    }

    /// Header requests for `number` return a JSON-RPC error.
    pub fn failing_on(mut self, number: u64) -> Self {
        self.failing.insert(number);
        self
    }

    /// Header requests for `number` return `null`.
    pub fn missing(mut self, number: u64) -> Self {
        self.missing.insert(number);
        self
    }

    /// The header this chain serves for `number`.
    pub fn header(number: u64) -> BlockHeaderDigestInput {
        BlockHeaderDigestInput {
            number,
            state_root: keccak256(format!("state:{number}")),
            receipts_root: keccak256(format!("receipts:{number}")),
            transactions_root: keccak256(format!("transactions:{number}")),
        }
    }

    /// Starts serving on an ephemeral localhost port.
    pub async fn spawn(self) -> std::io::Result<MockNode> {
        let server = ServerBuilder::default().build("127.0.0.1:0").await?;
        let addr = server.local_addr()?;
        let requests = Arc::clone(&self.requests);
        let handle = server.start(self.into_rpc());
        Ok(MockNode {
            addr,
            handle,
            requests,
        })
    }

    fn record(&self, number: u64) {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(number);
    }
}

#[async_trait]
impl EthHeaderApiServer for MockChain {
    async fn chain_id(&self) -> RpcResult<U64> {
        Ok(U64::from(self.chain_id))
    }

    async fn block_number(&self) -> RpcResult<U64> {
        Ok(U64::from(self.tip))
    }

    async fn block_by_number(
        &self,
        number: U64,
        _full_transactions: bool,
    ) -> RpcResult<Option<RpcBlockHeader>> {
        let number = number.to::<u64>();
        self.record(number);

        if self.failing.contains(&number) {
            return Err(ErrorObjectOwned::owned(
                INJECTED_FAILURE_CODE,
                format!("header unavailable for block {number}"),
                None::<()>,
            ));
        }
        if number > self.tip || self.missing.contains(&number) {
            return Ok(None);
        }

        let header = Self::header(number);
        Ok(Some(RpcBlockHeader {
            number: U64::from(number),
            state_root: header.state_root,
            receipts_root: header.receipts_root,
            transactions_root: header.transactions_root,
        }))
    }
}

/// A running [`MockChain`]. Stops serving when dropped.
pub struct MockNode {
    addr: SocketAddr,
    handle: ServerHandle,
    requests: Arc<Mutex<Vec<u64>>>,
}

impl MockNode {
    /// HTTP endpoint URL.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Block numbers requested via `eth_getBlockByNumber`, in arrival order.
    pub fn requested_blocks(&self) -> Vec<u64> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        let _ = self.handle.stop();
    }
}
