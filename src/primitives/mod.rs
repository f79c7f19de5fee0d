//! Primitive types
//!
//! This module defines the low-level primitive types used by the entropy
//! generators.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They intentionally do not attempt to replicate a
//! full-featured big-integer library.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer, wide enough to hold the
//!   largest supported entropy value

mod u256;

/// Fixed-size unsigned integer primitive backing cumulative entropy runs.
pub use u256::U256;
