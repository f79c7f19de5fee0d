//! Error taxonomy for entropy generation.
//!
//! Two failure kinds exist and both are non-retryable at this layer:
//!
//! - [`InvalidSizeError`]: the caller asked for a bit size outside the
//!   allowed set. Reported before any randomness is drawn.
//! - [`RandomSourceError`]: the underlying secure random source failed.
//!   Whether and when to retry is a decision for the caller or operator.
//!
//! Public operations return [`EntropyError`], which wraps either kind.

use std::io;

use thiserror::Error;

/// Result type for entropy operations.
pub type Result<T> = std::result::Result<T, EntropyError>;

/// The requested entropy size is not an allowed bit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid entropy size: {bits} bits (must be a multiple of 32 within 128..=256)")]
pub struct InvalidSizeError {
    /// The rejected bit size.
    pub bits: usize,
}

/// The secure random source could not produce bytes.
#[derive(Debug, Error)]
#[error("secure random source failed")]
pub struct RandomSourceError {
    #[source]
    source: io::Error,
}

impl RandomSourceError {
    pub fn new(source: io::Error) -> Self {
        Self { source }
    }

    /// The underlying I/O error reported by the source.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

impl From<io::Error> for RandomSourceError {
    fn from(source: io::Error) -> Self {
        Self::new(source)
    }
}

/// Any failure of an entropy operation.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),

    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),
}

impl EntropyError {
    /// Returns `true` for [`EntropyError::InvalidSize`].
    pub fn is_invalid_size(&self) -> bool {
        matches!(self, Self::InvalidSize(_))
    }

    /// Returns `true` for [`EntropyError::RandomSource`].
    pub fn is_random_source(&self) -> bool {
        matches!(self, Self::RandomSource(_))
    }
}
