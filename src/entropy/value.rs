use std::fmt;

use zeroize::Zeroize;

/// Raw entropy bytes handed to the caller.
///
/// The length is always `bit_size / 8` for the size that was requested.
/// Each value is a fresh allocation owned by the caller; the buffer is
/// wiped when the value is dropped.
///
/// `Debug` does not print the bytes. Use [`Entropy::as_bytes`] or the hex
/// formatting (`{}` / `{:x}`) when the contents are really needed.
///
/// Equality runs in time that depends only on the lengths, never on the
/// contents. `Hash` is not implemented.
#[derive(Clone)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub(crate) fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size of the value in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Takes the bytes out. The caller becomes responsible for wiping them.
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.0)
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }

        let mut diff = 0u8;

        for (a, b) in self.0.iter().zip(other.0.iter()) {
            diff |= a ^ b;
        }

        diff == 0
    }
}

impl Eq for Entropy {}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Entropy {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .finish_non_exhaustive()
    }
}

impl fmt::LowerHex for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

/// Lowercase hexadecimal, as mnemonic tooling usually prints entropy.
impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
