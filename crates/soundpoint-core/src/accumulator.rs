use std::time::{Duration, Instant};

use soundpoint_canonical::Commitment;
use tracing::{debug, info};

use crate::errors::{CheckpointError, MismatchedHeader};
use crate::sampler::BlockNumberSequence;
use crate::source::HeaderSource;
use crate::transcript::Transcript;

/// Progress is logged every this many folded blocks.
const PROGRESS_INTERVAL: usize = 25;

/// Output of one fold over a sampled sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    /// Final transcript value.
    pub commitment: Commitment,
    /// Blocks folded; equals the sequence length.
    pub sampled_count: usize,
    /// Wall-clock time of the fold loop, inline fetches included.
    pub elapsed: Duration,
}

/// Folds the headers of `sequence` into a fresh transcript, in sequence order.
///
/// The first fetch error aborts the fold and is returned as
/// [`CheckpointError::HeaderFetch`]; the partial transcript is dropped.
pub async fn accumulate<S: HeaderSource>(
    sequence: &BlockNumberSequence,
    source: &mut S,
) -> Result<Accumulation, CheckpointError> {
    let total = sequence.len();
    let started = Instant::now();
    let mut transcript = Transcript::new();

    info!(blocks = total, "building soundness checkpoint");

    for (idx, &number) in sequence.iter().enumerate() {
        let header = source
            .fetch_header(number)
            .await
            .map_err(|e| CheckpointError::header_fetch(number, e))?;

        if header.number != number {
            return Err(CheckpointError::header_fetch(
                number,
                MismatchedHeader {
                    requested: number,
                    returned: header.number,
                },
            ));
        }

        transcript = transcript.absorb(&header);
        debug!(block = number, "folded header");

        let processed = idx + 1;
        if processed % PROGRESS_INTERVAL == 0 || processed == total {
            info!(processed, total, current = number, "checkpoint progress");
        }
    }

    let sampled_count = transcript.absorbed();
    Ok(Accumulation {
        commitment: transcript.finish(),
        sampled_count,
        elapsed: started.elapsed(),
    })
}
