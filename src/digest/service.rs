//! The digest service: dispatch, streaming, and memoization
//!
//! The cache is keyed by request shape, not content: hashing the same file
//! path twice returns the first digest even if the file changed in between.
//! That is a documented property of the service, valid for the lifetime of
//! the owning [`DigestService`].

use crate::algo::Hasher;
use crate::error::{HashCheckError, IoResultExt, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Chunk size for streaming file reads, in bytes
pub const CHUNK_SIZE: usize = 4096;

/// Input to a digest computation: in-memory data or a file path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// In-memory string, hashed as UTF-8 bytes in one update
    Data(String),
    /// File path, streamed in [`CHUNK_SIZE`] chunks
    File(PathBuf),
}

/// Cache key: the exact request shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    algorithm: String,
    source: InputSource,
}

/// Cache hit/miss counters
///
/// `misses` counts provider invocations; a repeated identical request must
/// leave it unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from the cache
    pub hits: u64,
    /// Requests that reached the digest provider
    pub misses: u64,
}

/// Digest service owning the memoization cache
///
/// Single-threaded by construction: all operations take `&mut self`.
/// Callers needing concurrent access must add their own synchronization.
#[derive(Debug, Default)]
pub struct DigestService {
    cache: HashMap<CacheKey, String>,
    stats: CacheStats,
}

impl DigestService {
    /// Create a service with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the digest of `source` under `algorithm`.
    ///
    /// Results are memoized by the exact (algorithm, source) pair: a cache
    /// hit returns the stored digest without touching the provider or the
    /// filesystem. On an I/O failure the cache is left unmodified for that
    /// key.
    pub fn compute(&mut self, algorithm: &str, source: &InputSource) -> Result<String> {
        let key = CacheKey {
            algorithm: algorithm.to_string(),
            source: source.clone(),
        };

        if let Some(digest) = self.cache.get(&key) {
            self.stats.hits += 1;
            debug!(algorithm, "digest cache hit");
            return Ok(digest.clone());
        }
        self.stats.misses += 1;
        debug!(algorithm, "digest cache miss");

        let mut hasher = Hasher::new(algorithm)?;
        match source {
            InputSource::Data(data) => hasher.update(data.as_bytes()),
            InputSource::File(path) => stream_file(&mut hasher, path)?,
        }

        let digest = hasher.finalize();
        self.cache.insert(key, digest.clone());
        Ok(digest)
    }

    /// Compute a digest from the two-optional-parameter surface.
    ///
    /// Exactly one of `data` and `file_path` must be non-empty; empty
    /// strings count as absent. Both present or both absent fail with
    /// [`HashCheckError::InvalidArgument`].
    pub fn compute_digest(
        &mut self,
        algorithm: &str,
        data: Option<&str>,
        file_path: Option<&Path>,
    ) -> Result<String> {
        let data = data.filter(|d| !d.is_empty());
        let file_path = file_path.filter(|p| !p.as_os_str().is_empty());

        match (data, file_path) {
            (Some(_), Some(_)) => Err(HashCheckError::conflicting_inputs()),
            (None, None) => Err(HashCheckError::missing_input()),
            (Some(data), None) => self.compute(algorithm, &InputSource::Data(data.to_string())),
            (None, Some(path)) => self.compute(algorithm, &InputSource::File(path.to_path_buf())),
        }
    }

    /// Number of cached digests
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache hit/miss counters since construction
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Stream a file into the hasher in bounded chunks.
///
/// The handle is scoped to this function, so it is released on every exit
/// path, including mid-stream read failures.
fn stream_file(hasher: &mut Hasher, path: &Path) -> Result<()> {
    let file = File::open(path).with_path(path)?;
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, file);
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer).with_path(path)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    debug!(path = %path.display(), "streamed file into hasher");
    Ok(())
}

/// Compare a computed digest with a known reference value.
///
/// Exact case-sensitive string equality; no normalization of case or
/// whitespace is performed.
pub fn compare_digest(computed: &str, reference: &str) -> bool {
    computed == reference
}
