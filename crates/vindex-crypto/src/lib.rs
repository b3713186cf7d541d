// Vindex cryptographic primitives
//
// This crate provides the fingerprint encoder: a deterministic one-way
// digest over attribute strings, plus the fixed-capacity byte vectors the
// ledger's storage schema requires.

mod bounded;
mod hash;

pub use bounded::{bound, BoundedBytes};
pub use hash::{fingerprint, HashAlgorithm, HashFunction, HashOutput, Sha256Hasher, DIGEST_LEN};
