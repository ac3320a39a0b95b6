//! Wall-clock timing of single digest computations
//!
//! Because the digest service memoizes by exact (algorithm, data) pair, a
//! repeated size in the input sequence times a cache hit on its second
//! occurrence. That interaction is intended; the harness makes no attempt
//! to defeat the cache.

use crate::digest::{DigestService, InputSource};
use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default algorithm for timing runs
pub const DEFAULT_BENCH_ALGORITHM: &str = "sha256";

/// The character repeated to synthesize benchmark inputs
const FILL_CHAR: char = 'a';

/// Insertion-ordered mapping from input size to elapsed wall-clock time
///
/// Addressed by size, not position. Inserting an already-present size
/// overwrites its value but keeps the original position, so duplicate
/// sizes in a run collapse to one entry holding the last timing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTimingMap {
    entries: Vec<(usize, Duration)>,
}

impl SizeTimingMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a timing for `size`, overwriting any existing entry in place
    pub fn insert(&mut self, size: usize, elapsed: Duration) {
        match self.entries.iter_mut().find(|(s, _)| *s == size) {
            Some(entry) => entry.1 = elapsed,
            None => self.entries.push((size, elapsed)),
        }
    }

    /// Elapsed time recorded for `size`, if present
    pub fn get(&self, size: usize) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, d)| *d)
    }

    /// Elapsed seconds recorded for `size`, if present
    pub fn seconds(&self, size: usize) -> Option<f64> {
        self.get(size).map(|d| d.as_secs_f64())
    }

    /// Sizes in insertion order
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(s, _)| *s)
    }

    /// (size, elapsed) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Duration)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct sizes recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest elapsed time in the map, if any
    pub fn max_elapsed(&self) -> Option<Duration> {
        self.entries.iter().map(|(_, d)| *d).max()
    }
}

/// Time one digest computation per input size.
///
/// For each size `s`, synthesizes a string of `s` repeated `'a'` characters
/// and times exactly one `compute` call on a monotonic clock. Errors from
/// the digest service propagate unchanged; nothing is caught or retried.
pub fn measure_digest_timing(
    service: &mut DigestService,
    sizes: &[usize],
    algorithm: &str,
) -> Result<SizeTimingMap> {
    let mut results = SizeTimingMap::new();

    for &size in sizes {
        let message = FILL_CHAR.to_string().repeat(size);
        let source = InputSource::Data(message);

        let start = Instant::now();
        service.compute(algorithm, &source)?;
        let elapsed = start.elapsed();

        debug!(algorithm, size, ?elapsed, "timed digest computation");
        results.insert(size, elapsed);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashCheckError;

    #[test]
    fn test_keys_and_non_negative_values() {
        let mut service = DigestService::new();
        let results = measure_digest_timing(&mut service, &[1, 2, 3], "sha256").unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results.sizes().collect::<Vec<_>>(), vec![1, 2, 3]);
        for size in [1, 2, 3] {
            assert!(results.seconds(size).unwrap() >= 0.0);
        }
        assert!(results.get(4).is_none());
    }

    #[test]
    fn test_duplicate_sizes_collapse_to_one_entry() {
        let mut service = DigestService::new();
        let results = measure_digest_timing(&mut service, &[100, 100], "sha256").unwrap();

        assert_eq!(results.len(), 1);
        assert!(results.get(100).is_some());
        // One provider call and one cache hit for the repeated size.
        assert_eq!(service.stats().misses, 1);
        assert_eq!(service.stats().hits, 1);
    }

    #[test]
    fn test_preserves_supply_order() {
        let mut service = DigestService::new();
        let results = measure_digest_timing(&mut service, &[30, 10, 20], "sha256").unwrap();

        assert_eq!(results.sizes().collect::<Vec<_>>(), vec![30, 10, 20]);
    }

    #[test]
    fn test_propagates_unsupported_algorithm() {
        let mut service = DigestService::new();
        let err = measure_digest_timing(&mut service, &[1], "md4").unwrap_err();
        assert!(matches!(err, HashCheckError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_empty_size_list() {
        let mut service = DigestService::new();
        let results = measure_digest_timing(&mut service, &[], "sha256").unwrap();
        assert!(results.is_empty());
    }
}
