//! Command-line argument definitions

use crate::bench::DEFAULT_BENCH_ALGORITHM;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for HashCheck
#[derive(Parser, Debug)]
#[command(
    name = "hashcheck",
    version,
    about = "Multi-algorithm digest computation with memoization, verification, and timing benchmarks"
)]
pub struct CliArgs {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON where supported
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the digest of a file or an in-memory string
    Hash {
        /// File to digest
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// In-memory string to digest instead of a file
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,

        /// Algorithm name from the registry
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,

        /// Digest under every registry algorithm, with per-algorithm timing
        #[arg(long, conflicts_with = "algorithm")]
        all: bool,
    },

    /// Verify a digest against an expected reference value
    Verify {
        /// Expected digest (lowercase hex)
        #[arg(value_name = "EXPECTED")]
        expected: String,

        /// File to digest
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// In-memory string to digest instead of a file
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,

        /// Algorithm name from the registry
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,
    },

    /// Benchmark digest latency across increasing input sizes
    Bench {
        /// Algorithm name from the registry
        #[arg(short, long, default_value = DEFAULT_BENCH_ALGORITHM)]
        algorithm: String,

        /// Comma-separated input sizes, in characters
        #[arg(long, value_delimiter = ',', default_values_t = default_bench_sizes())]
        sizes: Vec<usize>,
    },

    /// List the supported algorithms
    Algorithms,
}

/// Default benchmark sizes: 1000 to 10000 characters in steps of 1000
pub fn default_bench_sizes() -> Vec<usize> {
    (1..=10).map(|i| i * 1000).collect()
}
