//! Streaming digest accumulators dispatched by algorithm name
//!
//! One [`Hasher`] variant per supported algorithm. Fixed-output algorithms
//! finalize at their native digest size; the two SHAKE variants are
//! extendable-output functions pinned to 16 and 32 bytes respectively.

use crate::error::{HashCheckError, Result};
use sha2::Digest;
use sha3::digest::ExtendableOutput;

/// Registry of supported algorithm names, sorted, hashlib-style lowercase.
pub const ALGORITHMS: &[&str] = &[
    "blake2b", "blake2s", "blake3", "md5", "sha1", "sha224", "sha256", "sha384", "sha3_224",
    "sha3_256", "sha3_384", "sha3_512", "sha512", "shake_128", "shake_256",
];

/// Output length requested from SHAKE128, in bytes
pub const SHAKE_128_OUTPUT_LEN: usize = 16;
/// Output length requested from SHAKE256, in bytes
pub const SHAKE_256_OUTPUT_LEN: usize = 32;

/// Unified streaming hasher over all registry algorithms
#[derive(Debug)]
pub enum Hasher {
    /// BLAKE2b-512
    Blake2b(blake2::Blake2b512),
    /// BLAKE2s-256
    Blake2s(blake2::Blake2s256),
    /// BLAKE3
    Blake3(blake3::Hasher),
    /// MD5
    Md5(md5::Md5),
    /// SHA-1
    Sha1(sha1::Sha1),
    /// SHA-224
    Sha224(sha2::Sha224),
    /// SHA-256
    Sha256(sha2::Sha256),
    /// SHA-384
    Sha384(sha2::Sha384),
    /// SHA-512
    Sha512(sha2::Sha512),
    /// SHA3-224
    Sha3_224(sha3::Sha3_224),
    /// SHA3-256
    Sha3_256(sha3::Sha3_256),
    /// SHA3-384
    Sha3_384(sha3::Sha3_384),
    /// SHA3-512
    Sha3_512(sha3::Sha3_512),
    /// SHAKE128 (XOF, 16-byte output)
    Shake128(sha3::Shake128),
    /// SHAKE256 (XOF, 32-byte output)
    Shake256(sha3::Shake256),
}

impl Hasher {
    /// Create a fresh accumulator for the named algorithm.
    ///
    /// Unknown names fail with [`HashCheckError::UnsupportedAlgorithm`].
    pub fn new(algorithm: &str) -> Result<Self> {
        match algorithm {
            "blake2b" => Ok(Self::Blake2b(blake2::Blake2b512::new())),
            "blake2s" => Ok(Self::Blake2s(blake2::Blake2s256::new())),
            "blake3" => Ok(Self::Blake3(blake3::Hasher::new())),
            "md5" => Ok(Self::Md5(md5::Md5::new())),
            "sha1" => Ok(Self::Sha1(sha1::Sha1::new())),
            "sha224" => Ok(Self::Sha224(sha2::Sha224::new())),
            "sha256" => Ok(Self::Sha256(sha2::Sha256::new())),
            "sha384" => Ok(Self::Sha384(sha2::Sha384::new())),
            "sha512" => Ok(Self::Sha512(sha2::Sha512::new())),
            "sha3_224" => Ok(Self::Sha3_224(sha3::Sha3_224::new())),
            "sha3_256" => Ok(Self::Sha3_256(sha3::Sha3_256::new())),
            "sha3_384" => Ok(Self::Sha3_384(sha3::Sha3_384::new())),
            "sha3_512" => Ok(Self::Sha3_512(sha3::Sha3_512::new())),
            "shake_128" => Ok(Self::Shake128(sha3::Shake128::default())),
            "shake_256" => Ok(Self::Shake256(sha3::Shake256::default())),
            other => Err(HashCheckError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Check whether a name is present in the registry
    pub fn is_supported(algorithm: &str) -> bool {
        ALGORITHMS.contains(&algorithm)
    }

    /// Get the registry name of this hasher's algorithm
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::Blake2b(_) => "blake2b",
            Self::Blake2s(_) => "blake2s",
            Self::Blake3(_) => "blake3",
            Self::Md5(_) => "md5",
            Self::Sha1(_) => "sha1",
            Self::Sha224(_) => "sha224",
            Self::Sha256(_) => "sha256",
            Self::Sha384(_) => "sha384",
            Self::Sha512(_) => "sha512",
            Self::Sha3_224(_) => "sha3_224",
            Self::Sha3_256(_) => "sha3_256",
            Self::Sha3_384(_) => "sha3_384",
            Self::Sha3_512(_) => "sha3_512",
            Self::Shake128(_) => "shake_128",
            Self::Shake256(_) => "shake_256",
        }
    }

    /// Digest length in bytes (hex encoding is twice this)
    pub fn output_size(&self) -> usize {
        match self {
            Self::Blake2b(_) | Self::Sha512(_) | Self::Sha3_512(_) => 64,
            Self::Sha384(_) | Self::Sha3_384(_) => 48,
            Self::Blake2s(_) | Self::Blake3(_) | Self::Sha256(_) | Self::Sha3_256(_) => 32,
            Self::Sha224(_) | Self::Sha3_224(_) => 28,
            Self::Sha1(_) => 20,
            Self::Md5(_) => 16,
            Self::Shake128(_) => SHAKE_128_OUTPUT_LEN,
            Self::Shake256(_) => SHAKE_256_OUTPUT_LEN,
        }
    }

    /// Update the hasher with more data
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Blake2b(h) => h.update(data),
            Self::Blake2s(h) => h.update(data),
            Self::Blake3(h) => {
                h.update(data);
            }
            Self::Md5(h) => h.update(data),
            Self::Sha1(h) => h.update(data),
            Self::Sha224(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
            Self::Sha384(h) => h.update(data),
            Self::Sha512(h) => h.update(data),
            Self::Sha3_224(h) => h.update(data),
            Self::Sha3_256(h) => h.update(data),
            Self::Sha3_384(h) => h.update(data),
            Self::Sha3_512(h) => h.update(data),
            Self::Shake128(h) => sha3::digest::Update::update(h, data),
            Self::Shake256(h) => sha3::digest::Update::update(h, data),
        }
    }

    /// Finalize and get the digest as a lowercase hex string
    pub fn finalize(self) -> String {
        match self {
            Self::Blake2b(h) => hex::encode(h.finalize()),
            Self::Blake2s(h) => hex::encode(h.finalize()),
            Self::Blake3(h) => h.finalize().to_hex().to_string(),
            Self::Md5(h) => hex::encode(h.finalize()),
            Self::Sha1(h) => hex::encode(h.finalize()),
            Self::Sha224(h) => hex::encode(h.finalize()),
            Self::Sha256(h) => hex::encode(h.finalize()),
            Self::Sha384(h) => hex::encode(h.finalize()),
            Self::Sha512(h) => hex::encode(h.finalize()),
            Self::Sha3_224(h) => hex::encode(h.finalize()),
            Self::Sha3_256(h) => hex::encode(h.finalize()),
            Self::Sha3_384(h) => hex::encode(h.finalize()),
            Self::Sha3_512(h) => hex::encode(h.finalize()),
            Self::Shake128(h) => hex::encode(h.finalize_boxed(SHAKE_128_OUTPUT_LEN)),
            Self::Shake256(h) => hex::encode(h.finalize_boxed(SHAKE_256_OUTPUT_LEN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_sorted_and_complete() {
        let mut sorted = ALGORITHMS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ALGORITHMS);

        for name in ALGORITHMS {
            assert!(Hasher::is_supported(name));
            let hasher = Hasher::new(name).unwrap();
            assert_eq!(hasher.algorithm(), *name);
        }
    }

    #[test]
    fn test_hasher_is_debug() {
        // Result combinators like unwrap_err need the error-position type
        // to be Debug, so the derive is part of the public contract.
        let hasher = Hasher::new("sha256").unwrap();
        assert!(format!("{hasher:?}").contains("Sha256"));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = Hasher::new("md4").unwrap_err();
        assert!(matches!(
            err,
            crate::error::HashCheckError::UnsupportedAlgorithm(ref name) if name == "md4"
        ));
        assert!(!Hasher::is_supported("md4"));
    }

    #[test]
    fn test_known_vectors() {
        let mut sha1 = Hasher::new("sha1").unwrap();
        sha1.update(b"Hello, world!");
        assert_eq!(sha1.finalize(), "943a702d06f34599aee1f8da8ef9f7296031d699");

        let sha1_empty = Hasher::new("sha1").unwrap();
        assert_eq!(
            sha1_empty.finalize(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );

        let sha256_empty = Hasher::new("sha256").unwrap();
        assert_eq!(
            sha256_empty.finalize(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let md5_empty = Hasher::new("md5").unwrap();
        assert_eq!(md5_empty.finalize(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_hex_length_matches_output_size() {
        for name in ALGORITHMS {
            let hasher = Hasher::new(name).unwrap();
            let expected_len = hasher.output_size() * 2;
            let digest = hasher.finalize();
            assert_eq!(digest.len(), expected_len, "algorithm {name}");
            assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(digest, digest.to_lowercase());
        }
    }

    #[test]
    fn test_xof_output_lengths() {
        let mut shake128 = Hasher::new("shake_128").unwrap();
        shake128.update(b"xof input");
        assert_eq!(shake128.finalize().len(), 32);

        let mut shake256 = Hasher::new("shake_256").unwrap();
        shake256.update(b"xof input");
        assert_eq!(shake256.finalize().len(), 64);
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let mut streamed = Hasher::new("sha256").unwrap();
        streamed.update(b"Hello, ");
        streamed.update(b"World!");

        let mut one_shot = Hasher::new("sha256").unwrap();
        one_shot.update(b"Hello, World!");

        assert_eq!(streamed.finalize(), one_shot.finalize());
    }
}
