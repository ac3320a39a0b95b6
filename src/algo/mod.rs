//! Digest algorithm registry and streaming accumulators
//!
//! Wraps the RustCrypto digest crates plus BLAKE3 behind a single streaming
//! interface, selected by hashlib-style algorithm name.

mod hasher;

pub use hasher::*;
