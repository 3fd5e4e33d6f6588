use std::time::Duration;

/// Per-request timeout applied to every JSON-RPC call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    /// Upper bound for a single request, including connection setup.
    pub request_timeout: Duration,
    /// Header requests kept in flight while prefetching. `1` fetches inline,
    /// one block per fold step.
    pub prefetch_concurrency: usize,
}

impl RpcConfig {
    /// Whether headers should be prefetched concurrently.
    pub fn prefetch_enabled(&self) -> bool {
        self.prefetch_concurrency > 1
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            prefetch_concurrency: 1,
        }
    }
}
