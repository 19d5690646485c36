use thiserror::Error;

/// Failure raised by a user-supplied comparator.
///
/// The container never inspects the payload, it only carries it back to the
/// caller. The element array and the pivot structure stay well-formed after a
/// failure, so the container remains usable.
#[derive(Debug, Error)]
#[error("comparator failed: {0}")]
pub struct ComparatorError(Box<dyn std::error::Error + Send + Sync>);

impl ComparatorError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(err.into())
    }
}

/// Errors surfaced by [`LazySorted`](crate::LazySorted) operations.
///
/// None of these are retried internally; they all propagate to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Comparator(#[from] ComparatorError),
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("slice step must be non-zero")]
    InvalidStep,
    #[error("element not found")]
    NotFound,
}
