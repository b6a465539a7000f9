/// Convenience alias for results produced by this crate.
pub type SortvizResult<T> = Result<T, SortvizError>;

/// Error taxonomy for the sort-and-visualize pipeline.
///
/// Nothing in the core is retried: a failed frame write aborts the run, and a
/// partially written output file is left in place.
#[derive(thiserror::Error, Debug)]
pub enum SortvizError {
    /// Bad CLI option or value (unknown sort name, zero-length array, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Caller broke the sink lifecycle contract (push before begin, frame
    /// width mismatch). A programming error, not a recoverable condition.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Output file could not be created or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The animated encoder rejected a frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SortvizError {
    /// Build an [`SortvizError::InvalidArgument`] from a message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`SortvizError::Precondition`] from a message.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build an [`SortvizError::Encode`] from a message.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
