//! Entropy for BIP39-style mnemonic and wallet generation
//!
//! This crate produces the raw entropy bytes that mnemonic encoders and
//! seed derivation consume. It does not build phrases, wordlists, or
//! derive keys.
//!
//! # Module overview
//!
//! - `os`  
//!   Platform access to the operating system CSPRNG. Failures are reported,
//!   never retried.
//!
//! - `primitives`  
//!   `U256`, the fixed-width big-endian integer backing cumulative runs.
//!
//! - `entropy`  
//!   Size validation, the secure source abstraction, one-shot generation
//!   and the cumulative generator.
//!
//! - `error`  
//!   `InvalidSizeError`, `RandomSourceError` and the wrapping
//!   `EntropyError`.
//!
//! # Example
//!
//! ```no_run
//! use mnemonic_entropy::{CumulativeEntropy, generate};
//!
//! let single = generate(256)?;
//! assert_eq!(single.len(), 32);
//!
//! let bulk = CumulativeEntropy::new(128)?;
//! for _ in 0..10_000 {
//!     let entropy = bulk.next()?;
//!     assert_eq!(entropy.len(), 16);
//! }
//! # Ok::<(), mnemonic_entropy::EntropyError>(())
//! ```

mod os;

pub mod entropy;
pub mod error;
pub mod primitives;

pub use entropy::{
    CumulativeEntropy, CumulativeParams, DEFAULT_THRESHOLD, Entropy, OsRandom, RandomSource,
    generate, generate_with,
};
pub use error::{EntropyError, InvalidSizeError, RandomSourceError};
