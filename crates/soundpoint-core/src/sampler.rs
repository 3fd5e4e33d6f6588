use crate::errors::CheckpointError;

/// Window sizes above this emit an advisory warning; they are not rejected.
pub const LARGE_WINDOW_THRESHOLD: u64 = 200_000;

/// Validated window size and stride, before the chain tip is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRequest {
    requested_blocks: u64,
    stride: u64,
}

impl WindowRequest {
    /// Validates user-supplied values. Zero and negative values are rejected,
    /// never clamped.
    pub fn new(requested_blocks: i64, stride: i64) -> Result<Self, CheckpointError> {
        if requested_blocks <= 0 || stride <= 0 {
            return Err(CheckpointError::InvalidParameters(format!(
                "--blocks and --step must be > 0 (got blocks={}, step={})",
                requested_blocks, stride
            )));
        }
        Ok(Self {
            requested_blocks: requested_blocks as u64,
            stride: stride as u64,
        })
    }

    /// Requested window size.
    pub fn requested_blocks(&self) -> u64 {
        self.requested_blocks
    }

    /// Gap between sampled blocks.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Whether the window is large enough to warrant a warning.
    pub fn is_large(&self) -> bool {
        self.requested_blocks > LARGE_WINDOW_THRESHOLD
    }

    /// Anchors the request at a chain tip.
    pub fn at_head(self, head_height: u64) -> SampleWindow {
        SampleWindow {
            head_height,
            requested_blocks: self.requested_blocks,
            stride: self.stride,
        }
    }
}

/// A window anchored at a chain tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    head_height: u64,
    requested_blocks: u64,
    stride: u64,
}

impl SampleWindow {
    /// Creates a window; `requested_blocks` and `stride` must be positive.
    pub fn new(head_height: u64, requested_blocks: u64, stride: u64) -> Result<Self, CheckpointError> {
        if requested_blocks == 0 || stride == 0 {
            return Err(CheckpointError::InvalidParameters(format!(
                "blocks and step must be > 0 (got blocks={}, step={})",
                requested_blocks, stride
            )));
        }
        Ok(Self {
            head_height,
            requested_blocks,
            stride,
        })
    }

    /// Chain tip; always the first sampled block.
    pub fn head_height(&self) -> u64 {
        self.head_height
    }

    /// Requested window size.
    pub fn requested_blocks(&self) -> u64 {
        self.requested_blocks
    }

    /// Gap between sampled blocks.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Lowest block the window may include: `max(0, head - blocks + 1)`.
    pub fn start_height(&self) -> u64 {
        self.head_height
            .saturating_sub(self.requested_blocks.saturating_sub(1))
    }

    /// Selects `head, head - stride, head - 2*stride, ...` down to
    /// [`SampleWindow::start_height`] inclusive.
    pub fn sample(&self) -> Result<BlockNumberSequence, CheckpointError> {
        let start_height = self.start_height();
        let step = usize::try_from(self.stride).unwrap_or(usize::MAX);
        let numbers: Vec<u64> = (start_height..=self.head_height)
            .rev()
            .step_by(step)
            .collect();

        if numbers.is_empty() {
            return Err(CheckpointError::EmptySelection {
                head_height: self.head_height,
                requested_blocks: self.requested_blocks,
                stride: self.stride,
            });
        }

        Ok(BlockNumberSequence {
            numbers,
            start_height,
        })
    }
}

/// Samples block numbers for a window anchored at `head_height`.
pub fn sample(
    head_height: u64,
    requested_blocks: u64,
    stride: u64,
) -> Result<BlockNumberSequence, CheckpointError> {
    SampleWindow::new(head_height, requested_blocks, stride)?.sample()
}

/// Non-empty, strictly decreasing block numbers in fold order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNumberSequence {
    numbers: Vec<u64>,
    start_height: u64,
}

impl BlockNumberSequence {
    /// Block numbers, highest first.
    pub fn as_slice(&self) -> &[u64] {
        &self.numbers
    }

    /// Iterates in fold order.
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.numbers.iter()
    }

    /// Number of sampled blocks.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always `false` for a sequence returned by the sampler.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Lower bound of the window the sequence was drawn from.
    pub fn start_height(&self) -> u64 {
        self.start_height
    }
}

impl<'a> IntoIterator for &'a BlockNumberSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_window_stops_at_start_height() {
        let seq = sample(100, 21, 4).unwrap();
        assert_eq!(seq.as_slice(), &[100, 96, 92, 88, 84, 80]);
        assert_eq!(seq.start_height(), 80);
    }

    #[test]
    fn window_larger_than_chain_clamps_at_genesis() {
        let seq = sample(5, 100, 1).unwrap();
        assert_eq!(seq.as_slice(), &[5, 4, 3, 2, 1, 0]);
        assert_eq!(seq.start_height(), 0);
    }

    #[test]
    fn single_block_window_is_just_the_head() {
        for stride in [1, 2, 7, u64::MAX] {
            assert_eq!(sample(42, 1, stride).unwrap().as_slice(), &[42]);
        }
        assert_eq!(sample(0, 1, 1).unwrap().as_slice(), &[0]);
    }

    #[test]
    fn stride_wider_than_window_keeps_only_head() {
        let seq = sample(1_000, 10, 50).unwrap();
        assert_eq!(seq.as_slice(), &[1_000]);
        assert_eq!(seq.start_height(), 991);
    }

    #[test]
    fn consecutive_elements_differ_by_exactly_stride() {
        let seq = sample(10_000, 128, 4).unwrap();
        assert_eq!(seq.len(), 32);
        assert_eq!(seq.as_slice()[0], 10_000);
        for pair in seq.as_slice().windows(2) {
            assert_eq!(pair[0] - pair[1], 4);
        }
        assert!(seq.iter().all(|&n| n >= seq.start_height()));
    }

    #[test]
    fn zero_parameters_are_invalid() {
        assert!(matches!(
            sample(10, 0, 1),
            Err(CheckpointError::InvalidParameters(_))
        ));
        assert!(matches!(
            sample(10, 1, 0),
            Err(CheckpointError::InvalidParameters(_))
        ));
    }

    #[test]
    fn window_request_rejects_non_positive_values() {
        for (blocks, step) in [(0, 4), (128, 0), (-1, 4), (128, -4), (i64::MIN, i64::MIN)] {
            let err = WindowRequest::new(blocks, step).unwrap_err();
            assert!(matches!(err, CheckpointError::InvalidParameters(_)));
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn large_window_is_advisory_only() {
        let request = WindowRequest::new(200_001, 4).unwrap();
        assert!(request.is_large());
        assert!(!WindowRequest::new(200_000, 4).unwrap().is_large());

        let window = request.at_head(1_000_000);
        assert_eq!(window.start_height(), 800_000);
        assert_eq!(window.sample().unwrap().len(), 50_001);
    }
}
