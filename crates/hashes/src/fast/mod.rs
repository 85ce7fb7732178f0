//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.

pub mod xxh32;
pub mod xxh64;

pub use xxh32::{Xxh32, Xxh32State};
pub use xxh64::{Xxh64, Xxh64State};
