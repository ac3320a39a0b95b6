//! Digest computation service with request-shape memoization
//!
//! Dispatches to the algorithm registry, streams file input in bounded
//! chunks, and caches results keyed by (algorithm, input identity).

mod service;

pub use service::*;
