//! Checkpoint construction for L1 soundness checkpoints.
//!
//! This crate provides:
//! - The block sampler: tip height, window size and stride to an ordered,
//!   strictly decreasing block-number sequence
//! - The transcript: an owned 32-byte Keccak hash chain
//! - The accumulator: folds header roots from a [`HeaderSource`] into the
//!   transcript in sampler order
//! - Result assembly with chain identity and network labels
//!
//! Core invariants:
//! - Sampling is a pure function of `(head, blocks, stride)`
//! - Headers are folded strictly from the highest sampled block to the lowest
//! - A failed fetch aborts the build; no partial commitment is ever returned
//!
#![deny(missing_docs)]

/// Sequential fold of header payloads into a commitment.
pub mod accumulator;
/// Plan, execute and package one checkpoint build.
pub mod checkpoint;
/// Error types for checkpoint construction.
pub mod errors;
/// Chain id to network label lookup.
pub mod network;
/// Block-number selection for a checkpoint window.
pub mod sampler;
/// Header-source abstraction consumed by the accumulator.
pub mod source;
/// Owned hash-chain transcript.
pub mod transcript;

pub use accumulator::{accumulate, Accumulation};
pub use checkpoint::{build_checkpoint, CheckpointPlan, CheckpointResult};
pub use errors::{BoxError, CheckpointError, MismatchedHeader};
pub use network::{network_label, ChainIdentity};
pub use sampler::{sample, BlockNumberSequence, SampleWindow, WindowRequest, LARGE_WINDOW_THRESHOLD};
pub use source::{HeaderSet, HeaderSource, MissingHeader};
pub use transcript::Transcript;

pub use soundpoint_canonical::{BlockHeaderDigestInput, Commitment, B256};
