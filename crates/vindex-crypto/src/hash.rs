// Hashing functions and types
//
// Hash functionality for the fingerprint encoder, with a focus on the
// deterministic properties the ledger schema depends on: equal attribute
// byte sequences always yield equal fingerprints, with no process-wide
// state, randomness, or locale dependence.

use std::fmt;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use vindex_error::{CryptoError, CryptoResult};

/// Length in bytes of every digest produced by this module
pub const DIGEST_LEN: usize = 32;

/// Output of a hash function with algorithm awareness
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct HashOutput {
    /// The raw bytes of the hash
    data: [u8; DIGEST_LEN],
    /// The algorithm used to generate this hash
    algorithm: HashAlgorithm,
}

impl HashOutput {
    /// Create a new hash output from raw bytes with the specified algorithm
    pub fn new(data: [u8; DIGEST_LEN], algorithm: HashAlgorithm) -> Self {
        Self { data, algorithm }
    }

    /// Get the raw bytes of the hash
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the algorithm used to generate this hash
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Convert the hash output to a hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Create a hash output from a hex string with the specified algorithm
    pub fn from_hex(hex_str: &str, algorithm: HashAlgorithm) -> CryptoResult<Self> {
        let bytes = hex::decode(hex_str).map_err(|_| CryptoError::InvalidFormat)?;

        if bytes.len() != DIGEST_LEN {
            return Err(CryptoError::InvalidDigestLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }

        let mut data = [0u8; DIGEST_LEN];
        data.copy_from_slice(&bytes);
        Ok(Self::new(data, algorithm))
    }

    /// True when every byte of the digest is zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }
}

impl fmt::Debug for HashOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashOutput({}, {})", self.algorithm, self.to_hex())
    }
}

impl fmt::Display for HashOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.to_string().to_lowercase(), self.to_hex())
    }
}

/// Hash algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256, the digest the ledger schema and content store both use
    Sha256,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => write!(f, "Sha256"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha2-256" => Ok(Self::Sha256),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Interface for hash functions
pub trait HashFunction: Send + Sync {
    /// Hash the provided data
    fn hash(&self, data: &[u8]) -> HashOutput;

    /// Get the algorithm used by this hash function
    fn algorithm(&self) -> HashAlgorithm;
}

/// SHA-256 implementation of the hash function interface
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl HashFunction for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> HashOutput {
        let digest = Sha256::digest(data);
        let mut data = [0u8; DIGEST_LEN];
        data.copy_from_slice(&digest);
        HashOutput::new(data, HashAlgorithm::Sha256)
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }
}

/// Compute the fingerprint of an attribute string
///
/// Hashes the UTF-8 bytes of `attribute` into exactly [`DIGEST_LEN`] bytes.
/// Hashing first guarantees a constant-size input to [`crate::bound`]
/// regardless of the attribute's natural length, and keeps raw attribute
/// values off the public ledger. No salt or keying is used, so equal inputs
/// remain linkable.
pub fn fingerprint(attribute: &str) -> HashOutput {
    Sha256Hasher.hash(attribute.as_bytes())
}
