//! Canonical encoding primitives for L1 soundness checkpoints.
//!
//! Every byte that enters the checkpoint transcript is produced by this crate:
//! the pipe-separated header payload and the Keccak-256 chaining step over the
//! 32-byte commitment type.
//!
#![deny(missing_docs)]

/// 32-byte commitments and the Keccak chaining step.
pub mod digest;
/// Per-block header roots consumed by the accumulator.
pub mod header;
/// Canonical `number|state|receipts|transactions` payload.
pub mod payload;
/// Validation errors for canonical values.
pub mod validation;

pub use alloy_primitives::B256;
pub use digest::{chain_step, Commitment};
pub use header::BlockHeaderDigestInput;
pub use payload::{root_hex, CanonicalPayload, PAYLOAD_SEPARATOR};
pub use validation::ValidationError;
