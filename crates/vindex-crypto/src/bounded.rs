// Bounded byte vectors
//
// The ledger's storage schema only accepts fixed-capacity vectors. A
// BoundedBytes value always holds exactly its capacity: the payload sits
// left-aligned at offset 0 and the remainder stays zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use vindex_error::{CryptoError, CryptoResult};

/// A byte vector of fixed, schema-imposed length
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundedBytes {
    data: Vec<u8>,
}

impl BoundedBytes {
    /// The fixed length of this vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the full zero-padded contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// True when every byte, padding included, is zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }
}

impl fmt::Debug for BoundedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedBytes[{}](0x{})", self.len(), hex::encode(&self.data))
    }
}

impl AsRef<[u8]> for BoundedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Copy `bytes` into a zero-initialized buffer of exactly `length` bytes
///
/// The length check happens before any copy: input longer than `length`
/// fails with [`CryptoError::LengthExceeded`], it is never silently
/// truncated.
pub fn bound(bytes: &[u8], length: usize) -> CryptoResult<BoundedBytes> {
    if bytes.len() > length {
        return Err(CryptoError::LengthExceeded(length));
    }

    let mut data = vec![0u8; length];
    data[..bytes.len()].copy_from_slice(bytes);
    Ok(BoundedBytes { data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_zero_pads_to_exact_length() {
        let out = bound(&[1, 2, 3], 8).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(out.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn bound_accepts_exact_fit() {
        let out = bound(&[9; 32], 32).unwrap();
        assert_eq!(out.len(), 32);
        assert_eq!(out.as_bytes(), &[9; 32]);
    }

    #[test]
    fn bound_rejects_over_length_input() {
        let err = bound(&[0; 33], 32).unwrap_err();
        assert_eq!(err, CryptoError::LengthExceeded(32));
    }

    #[test]
    fn bound_of_empty_input_is_all_zero() {
        let out = bound(&[], 4).unwrap();
        assert!(out.is_zero());
        assert_eq!(out.as_bytes(), &[0, 0, 0, 0]);
    }
}
