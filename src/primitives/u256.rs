//! 256-bit unsigned integer primitive
//!
//! `U256` is the counter behind cumulative entropy generation: a run starts
//! from a secure random value and advances by one per issued value.
//!
//! The internal representation is big-endian, which matches the byte order
//! entropy is imported from and exported to. Increments wrap modulo 2²⁵⁶.

mod core;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
