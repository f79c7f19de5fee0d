//! Secure entropy source.
//!
//! [`RandomSource`] is the single primitive the generators depend on:
//! "fill N bytes with secure randomness, or fail". [`OsRandom`] is the
//! production implementation backed by the operating system; tests and
//! embedders may provide their own.
//!
//! [`generate`] is the one-shot path: one validated size, one draw.

use crate::entropy::Entropy;
use crate::entropy::size::{byte_len, validate};
use crate::error::{RandomSourceError, Result};
use crate::os::sys_random;

/// A cryptographically secure source of random bytes.
///
/// Implementations must be safe to call from several threads at once.
/// A failure is final for that call: callers do not retry internally.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` entirely with secure random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> std::result::Result<(), RandomSourceError>;
}

/// Random source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> std::result::Result<(), RandomSourceError> {
        sys_random(dest).map_err(RandomSourceError::from)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    fn fill_bytes(&self, dest: &mut [u8]) -> std::result::Result<(), RandomSourceError> {
        (**self).fill_bytes(dest)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for std::sync::Arc<S> {
    fn fill_bytes(&self, dest: &mut [u8]) -> std::result::Result<(), RandomSourceError> {
        (**self).fill_bytes(dest)
    }
}

/// Draws `bit_size / 8` fresh bytes from the operating system.
///
/// # Errors
///
/// - [`EntropyError::InvalidSize`](crate::EntropyError::InvalidSize) if
///   `bit_size` is not allowed; no randomness is drawn.
/// - [`EntropyError::RandomSource`](crate::EntropyError::RandomSource) if
///   the OS source fails.
pub fn generate(bit_size: usize) -> Result<Entropy> {
    generate_with(&OsRandom, bit_size)
}

/// Same as [`generate`], drawing from an explicit source.
pub fn generate_with<S: RandomSource + ?Sized>(source: &S, bit_size: usize) -> Result<Entropy> {
    validate(bit_size)?;

    let mut entropy = Entropy::zeroed(byte_len(bit_size));
    source.fill_bytes(entropy.as_mut_bytes())?;

    Ok(entropy)
}
