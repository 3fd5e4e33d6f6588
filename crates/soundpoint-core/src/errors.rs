use thiserror::Error;

/// Boxed error from a collaborator (network client, header source).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of a checkpoint build.
#[derive(Error, Debug)]
pub enum CheckpointError {
    /// The network endpoint could not be reached or validated.
    #[error("failed to connect to RPC endpoint: {0}")]
    Connection(#[source] BoxError),
    /// Window size or stride is not a positive integer.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// The sampler selected no blocks.
    #[error(
        "no blocks selected for checkpoint (head={head_height}, blocks={requested_blocks}, step={stride})"
    )]
    EmptySelection {
        /// Chain tip the window was anchored at.
        head_height: u64,
        /// Requested window size.
        requested_blocks: u64,
        /// Requested stride.
        stride: u64,
    },
    /// The header source failed for a sampled block.
    #[error("failed to fetch header for block {number}: {source}")]
    HeaderFetch {
        /// Block whose header could not be obtained.
        number: u64,
        /// Underlying source error.
        #[source]
        source: BoxError,
    },
}

impl CheckpointError {
    /// Wraps a connection failure.
    pub fn connection(err: impl Into<BoxError>) -> Self {
        Self::Connection(err.into())
    }

    /// Wraps a header-source failure for `number`.
    pub fn header_fetch(number: u64, err: impl Into<BoxError>) -> Self {
        Self::HeaderFetch {
            number,
            source: err.into(),
        }
    }

    /// Process exit code: `1` for failures before construction starts,
    /// `2` for failures during construction.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection(_) | Self::InvalidParameters(_) => 1,
            Self::EmptySelection { .. } | Self::HeaderFetch { .. } => 2,
        }
    }
}

/// A source answered with a different block than the one requested.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("source returned block {returned} for requested block {requested}")]
pub struct MismatchedHeader {
    /// Block number that was asked for.
    pub requested: u64,
    /// Block number carried by the returned header.
    pub returned: u64,
}
