//! # HashCheck - Digest Computation with Memoization
//!
//! HashCheck computes cryptographic and checksum digests of in-memory data
//! or files under a selectable algorithm, memoizes repeated computations,
//! verifies digests against known reference values, and benchmarks hashing
//! latency across increasing input sizes.
//!
//! ## Features
//!
//! - **Algorithm Registry**: MD5, SHA-1, SHA-2 and SHA-3 families, SHAKE
//!   extendable-output variants, BLAKE2, BLAKE3
//! - **Streaming File Input**: bounded 4096-byte chunks, handle released on
//!   every exit path
//! - **Memoization**: results cached by exact (algorithm, input) request
//!   shape for the life of the service
//! - **Verification**: exact case-sensitive digest comparison
//! - **Timing Benchmarks**: wall-clock latency per input size, rendered as
//!   a terminal bar chart or JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use hashcheck::digest::{DigestService, InputSource};
//!
//! let mut service = DigestService::new();
//! let digest = service
//!     .compute("sha256", &InputSource::Data("Hello, world!".to_string()))
//!     .unwrap();
//! println!("sha256: {digest}");
//! ```
//!
//! ## Benchmarking
//!
//! ```no_run
//! use hashcheck::bench::measure_digest_timing;
//! use hashcheck::digest::DigestService;
//! use hashcheck::report::render_bar_chart;
//!
//! let mut service = DigestService::new();
//! let results = measure_digest_timing(&mut service, &[1000, 2000, 3000], "sha256").unwrap();
//! print!("{}", render_bar_chart(&results, "sha256"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod bench;
pub mod config;
pub mod digest;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use algo::{Hasher, ALGORITHMS};
pub use bench::{measure_digest_timing, SizeTimingMap};
pub use digest::{compare_digest, DigestService, InputSource};
pub use error::{HashCheckError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use hashcheck::prelude::*;
    //! ```

    pub use crate::algo::{Hasher, ALGORITHMS};
    pub use crate::bench::{measure_digest_timing, SizeTimingMap};
    pub use crate::digest::{compare_digest, CacheStats, DigestService, InputSource};
    pub use crate::error::{HashCheckError, Result};
    pub use crate::report::{render_bar_chart, render_json};
}
