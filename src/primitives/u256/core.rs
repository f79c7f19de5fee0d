use zeroize::Zeroize;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
///
/// This type exposes only what entropy generation needs: big-endian
/// import and export, bit-length queries and wrapping increments. Holders
/// of secret values are expected to call [`Zeroize::zeroize`] when done.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Width of the integer in bytes.
    pub const BYTES: usize = 32;

    /// Builds a value from a big-endian byte slice of at most 32 bytes.
    ///
    /// Shorter inputs are right-aligned, so leading zero bytes are implied.
    /// Returns `None` if the slice is longer than 32 bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > Self::BYTES {
            return None;
        }

        let mut out = [0u8; 32];
        out[Self::BYTES - bytes.len()..].copy_from_slice(bytes);

        Some(U256(out))
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Number of significant bits (`256 - leading_zeros`).
    pub fn bits(&self) -> u32 {
        256 - self.leading_zeros()
    }

    /// Length of the minimal big-endian encoding, in bytes.
    ///
    /// Zero has an empty minimal encoding and therefore a length of `0`.
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Returns the minimal big-endian encoding, with leading zero bytes
    /// stripped.
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        self.0[Self::BYTES - self.byte_len()..].to_vec()
    }

    /// Adds one in place, wrapping to zero past 2²⁵⁶ − 1.
    pub fn increment(&mut self) {
        for byte in self.0.iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;

            if !carry {
                return;
            }
        }
    }
}

impl Zeroize for U256 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
