use soundpoint_canonical::{chain_step, BlockHeaderDigestInput, CanonicalPayload, Commitment};

/// Hash-chain state for one checkpoint build.
///
/// Starts at 32 zero bytes. Each [`Transcript::absorb`] consumes the value and
/// returns the next one, so a transcript has exactly one owner and cannot be
/// shared between builds.
#[derive(Debug)]
pub struct Transcript {
    state: Commitment,
    absorbed: usize,
}

impl Transcript {
    /// Fresh transcript at the zero value.
    pub fn new() -> Self {
        Self {
            state: Commitment::ZERO,
            absorbed: 0,
        }
    }

    /// Folds one block: `state = keccak256(state || payload(header))`.
    #[must_use]
    pub fn absorb(self, header: &BlockHeaderDigestInput) -> Self {
        let payload = CanonicalPayload::encode(header);
        Self {
            state: chain_step(&self.state, payload.as_bytes()),
            absorbed: self.absorbed + 1,
        }
    }

    /// Blocks folded so far.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Consumes the transcript into its final commitment.
    pub fn finish(self) -> Commitment {
        self.state
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundpoint_canonical::B256;

    fn header(number: u64) -> BlockHeaderDigestInput {
        BlockHeaderDigestInput {
            number,
            state_root: B256::repeat_byte(0x11),
            receipts_root: B256::repeat_byte(0x22),
            transactions_root: B256::repeat_byte(0x33),
        }
    }

    #[test]
    fn untouched_transcript_finishes_at_zero() {
        assert_eq!(Transcript::new().finish(), Commitment::ZERO);
    }

    #[test]
    fn absorption_order_changes_the_commitment() {
        let forward = Transcript::new().absorb(&header(10)).absorb(&header(6));
        assert_eq!(forward.absorbed(), 2);
        let backward = Transcript::new().absorb(&header(6)).absorb(&header(10));
        assert_ne!(forward.finish(), backward.finish());
    }
}
