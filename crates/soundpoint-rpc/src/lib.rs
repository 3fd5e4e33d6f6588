//! Ethereum JSON-RPC network collaborator for soundness checkpoints.
//!
//! Connects to an execution-layer node over HTTP, reports its chain id and
//! tip, and supplies block header roots to the checkpoint accumulator,
//! either one request per fold step or through an ordered prefetch.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod prefetch;
#[cfg(feature = "test-utils")]
pub mod testing;
pub mod types;

pub use client::RpcClient;
pub use config::{RpcConfig, DEFAULT_REQUEST_TIMEOUT};
pub use error::RpcError;
pub use prefetch::PrefetchingSource;
pub use types::RpcBlockHeader;
