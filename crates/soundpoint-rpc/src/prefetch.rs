//! Ordered concurrent prefetch of sampled headers.

use std::collections::VecDeque;
use std::time::Instant;

use futures::{stream, StreamExt};
use soundpoint_canonical::BlockHeaderDigestInput;
use soundpoint_core::HeaderSource;
use tracing::{info, warn};

use crate::client::RpcClient;
use crate::error::RpcError;

/// Header source that fetches a whole sampled sequence concurrently on first
/// use, then hands headers out in plan order.
///
/// At most `concurrency` requests are in flight. Results are buffered in plan
/// order, so the fold still consumes them highest block first. Prefetching
/// stops at the first failing block (in plan order); that error is returned
/// when the fold asks for that block, exactly as an inline fetch would.
pub struct PrefetchingSource<'a> {
    client: &'a RpcClient,
    plan: Vec<u64>,
    concurrency: usize,
    loaded: Option<Prefetched>,
}

struct Prefetched {
    ready: VecDeque<(u64, BlockHeaderDigestInput)>,
    failure: Option<(u64, RpcError)>,
}

impl<'a> PrefetchingSource<'a> {
    /// Prepares a prefetch of `plan` (block numbers in fold order).
    pub fn new(client: &'a RpcClient, plan: &[u64], concurrency: usize) -> Self {
        Self {
            client,
            plan: plan.to_vec(),
            concurrency: concurrency.max(1),
            loaded: None,
        }
    }

    async fn load(&mut self) -> Prefetched {
        let started = Instant::now();
        let client = self.client;
        let mut ready = VecDeque::with_capacity(self.plan.len());
        let mut failure = None;

        let mut fetches = stream::iter(self.plan.iter().copied())
            .map(|number| async move { (number, RpcClient::fetch_header(client, number).await) })
            .buffered(self.concurrency);

        while let Some((number, result)) = fetches.next().await {
            match result {
                Ok(header) => ready.push_back((number, header)),
                Err(err) => {
                    warn!(block = number, error = %err, "prefetch stopped at failing block");
                    failure = Some((number, err));
                    break;
                }
            }
        }

        info!(
            fetched = ready.len(),
            planned = self.plan.len(),
            concurrency = self.concurrency,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prefetched headers"
        );

        Prefetched { ready, failure }
    }
}

impl HeaderSource for PrefetchingSource<'_> {
    type Error = RpcError;

    async fn fetch_header(&mut self, number: u64) -> Result<BlockHeaderDigestInput, RpcError> {
        if self.loaded.is_none() {
            let prefetched = self.load().await;
            self.loaded = Some(prefetched);
        }

        if let Some(loaded) = self.loaded.as_mut() {
            if loaded.ready.front().is_some_and(|(n, _)| *n == number) {
                if let Some((_, header)) = loaded.ready.pop_front() {
                    return Ok(header);
                }
            }
            if loaded.failure.as_ref().is_some_and(|(n, _)| *n == number) {
                if let Some((_, err)) = loaded.failure.take() {
                    return Err(err);
                }
            }
        }

        // Not part of the plan, or already handed out.
        RpcClient::fetch_header(self.client, number).await
    }
}
