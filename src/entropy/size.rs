//! Entropy size validation.
//!
//! BIP39 entropy is between 128 and 256 bits long, in steps of 32 bits
//! (12 to 24 mnemonic words). Every operation that accepts a bit size runs
//! [`validate`] before touching any randomness.

use crate::error::InvalidSizeError;

/// Smallest allowed entropy size, in bits.
pub const MIN_BITS: usize = 128;

/// Largest allowed entropy size, in bits.
pub const MAX_BITS: usize = 256;

/// Allowed sizes are multiples of this many bits.
pub const BIT_STEP: usize = 32;

/// Every allowed entropy size, in ascending order.
pub const VALID_SIZES: [usize; 5] = [128, 160, 192, 224, 256];

/// Checks that `bit_size` is a multiple of 32 within `128..=256`.
pub fn validate(bit_size: usize) -> Result<(), InvalidSizeError> {
    if bit_size % BIT_STEP != 0 || !(MIN_BITS..=MAX_BITS).contains(&bit_size) {
        return Err(InvalidSizeError { bits: bit_size });
    }

    Ok(())
}

/// Byte length of an entropy value of `bit_size` bits.
///
/// Only meaningful for sizes that pass [`validate`].
pub const fn byte_len(bit_size: usize) -> usize {
    bit_size / 8
}
