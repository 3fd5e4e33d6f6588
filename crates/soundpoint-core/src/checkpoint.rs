//! Checkpoint builds and their result.

use serde::{Deserialize, Serialize};
use soundpoint_canonical::Commitment;
use tracing::info;

use crate::accumulator::{accumulate, Accumulation};
use crate::errors::CheckpointError;
use crate::network::ChainIdentity;
use crate::sampler::{BlockNumberSequence, SampleWindow};
use crate::source::HeaderSource;

/// A sampled window ready to be folded.
///
/// Sampling happens up front so callers can hand the sequence to a header
/// source (for example to prefetch it) before the fold starts.
#[derive(Debug, Clone)]
pub struct CheckpointPlan {
    identity: ChainIdentity,
    window: SampleWindow,
    sequence: BlockNumberSequence,
}

impl CheckpointPlan {
    /// Samples `window` for the chain `identity`.
    pub fn new(identity: ChainIdentity, window: SampleWindow) -> Result<Self, CheckpointError> {
        let sequence = window.sample()?;
        info!(
            chain_id = identity.chain_id,
            head = window.head_height(),
            start = sequence.start_height(),
            sampled = sequence.len(),
            "sampled checkpoint window"
        );
        Ok(Self {
            identity,
            window,
            sequence,
        })
    }

    /// Block numbers in fold order.
    pub fn sequence(&self) -> &BlockNumberSequence {
        &self.sequence
    }

    /// Window the plan was sampled from.
    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    /// Folds the sampled headers from `source` and packages the result.
    pub async fn execute<S: HeaderSource>(
        self,
        source: &mut S,
    ) -> Result<CheckpointResult, CheckpointError> {
        let accumulation = accumulate(&self.sequence, source).await?;
        Ok(CheckpointResult::assemble(
            self.identity,
            &self.window,
            accumulation,
        ))
    }
}

/// Samples `window`, folds its headers from `source`, and returns the result.
pub async fn build_checkpoint<S: HeaderSource>(
    identity: ChainIdentity,
    window: SampleWindow,
    source: &mut S,
) -> Result<CheckpointResult, CheckpointError> {
    CheckpointPlan::new(identity, window)?.execute(source).await
}

/// The externally visible outcome of one build.
///
/// Fields are declared in JSON key order so serialized output is sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointResult {
    chain_id: u64,
    commitment_hex: Commitment,
    elapsed_seconds: f64,
    head_height: u64,
    network_label: String,
    requested_blocks: u64,
    sampled_count: u64,
    start_height: u64,
    stride: u64,
}

impl CheckpointResult {
    /// Packs chain identity, window bounds and fold output.
    pub fn assemble(identity: ChainIdentity, window: &SampleWindow, acc: Accumulation) -> Self {
        Self {
            chain_id: identity.chain_id,
            commitment_hex: acc.commitment,
            elapsed_seconds: round_centis(acc.elapsed.as_secs_f64()),
            head_height: window.head_height(),
            network_label: identity.network_label,
            requested_blocks: window.requested_blocks(),
            sampled_count: acc.sampled_count as u64,
            start_height: window.start_height(),
            stride: window.stride(),
        }
    }

    /// Chain id.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Network label.
    pub fn network_label(&self) -> &str {
        &self.network_label
    }

    /// First sampled block.
    pub fn head_height(&self) -> u64 {
        self.head_height
    }

    /// Window lower bound.
    pub fn start_height(&self) -> u64 {
        self.start_height
    }

    /// Requested window size.
    pub fn requested_blocks(&self) -> u64 {
        self.requested_blocks
    }

    /// Sampling stride.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Blocks folded into the commitment.
    pub fn sampled_count(&self) -> u64 {
        self.sampled_count
    }

    /// Fold duration in seconds, two decimals.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// The checkpoint commitment.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment_hex
    }
}

fn round_centis(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}
