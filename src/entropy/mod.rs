//! Entropy generation for mnemonic seeding
//!
//! Two strategies are offered on top of one secure source:
//!
//! - [`generate`]: a direct draw from the OS CSPRNG for every value.
//!   Suitable for occasional use.
//! - [`CumulativeEntropy`]: one secure draw seeds a run of sequential
//!   values. Suitable for issuing many values in rapid succession, such as
//!   bulk wallet provisioning.
//!
//! Sizes are validated by [`size::validate`] before any randomness is
//! drawn. Mnemonic encoding, checksums and seed derivation are left to the
//! consumer; every returned [`Entropy`] is meant to be treated as
//! independent input.

pub mod cumulative;
pub mod size;
pub mod source;
mod value;

pub use cumulative::{CumulativeEntropy, CumulativeParams, DEFAULT_THRESHOLD};
pub use source::{OsRandom, RandomSource, generate, generate_with};
pub use value::Entropy;
