use std::collections::BTreeMap;

use soundpoint_canonical::BlockHeaderDigestInput;
use thiserror::Error;

/// Supplies header roots for sampled blocks.
///
/// The accumulator calls [`HeaderSource::fetch_header`] once per sampled
/// block, highest block first. Retries and timeouts belong to the
/// implementation; any error returned here aborts the build.
#[allow(async_fn_in_trait)]
pub trait HeaderSource {
    /// Error returned when a header cannot be supplied.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the header roots of block `number`.
    async fn fetch_header(&mut self, number: u64) -> Result<BlockHeaderDigestInput, Self::Error>;
}

/// In-memory header source keyed by block number.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    headers: BTreeMap<u64, BlockHeaderDigestInput>,
}

impl HeaderSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a header.
    pub fn insert(&mut self, header: BlockHeaderDigestInput) {
        self.headers.insert(header.number, header);
    }

    /// Number of headers held.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl FromIterator<BlockHeaderDigestInput> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = BlockHeaderDigestInput>>(iter: I) -> Self {
        let mut set = Self::new();
        for header in iter {
            set.insert(header);
        }
        set
    }
}

/// A [`HeaderSet`] has no entry for the requested block.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no header for block {0}")]
pub struct MissingHeader(pub u64);

impl HeaderSource for HeaderSet {
    type Error = MissingHeader;

    async fn fetch_header(&mut self, number: u64) -> Result<BlockHeaderDigestInput, MissingHeader> {
        self.headers.get(&number).copied().ok_or(MissingHeader(number))
    }
}
