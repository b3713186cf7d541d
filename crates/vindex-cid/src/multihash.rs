// Multihash type
//
// Self-describing digest format `{hash-function-code, length, bytes}`
// embedded inside a content identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use vindex_crypto::HashOutput;
use vindex_error::{CodecError, CodecResult};

use crate::varint::{read_uvarint, write_uvarint};

/// Multicodec code for SHA2-256
pub const MULTIHASH_SHA2_256: u64 = 0x12;

/// A self-describing digest: hash-function code, length, digest bytes
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Wrap a digest under the given multicodec hash-function code
    pub fn new(code: u64, digest: Vec<u8>) -> Self {
        Self { code, digest }
    }

    /// Wrap a SHA2-256 fingerprint
    pub fn sha2_256(hash: &HashOutput) -> Self {
        Self {
            code: MULTIHASH_SHA2_256,
            digest: hash.as_bytes().to_vec(),
        }
    }

    /// The hash-function code
    pub fn code(&self) -> u64 {
        self.code
    }

    /// The digest length in bytes
    pub fn size(&self) -> usize {
        self.digest.len()
    }

    /// The digest bytes
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Serialize to the wire form: varint code, varint length, digest
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.digest.len());
        write_uvarint(self.code, &mut out);
        write_uvarint(self.digest.len() as u64, &mut out);
        out.extend_from_slice(&self.digest);
        out
    }

    /// Parse the wire form, requiring the digest length field to match the
    /// bytes actually present
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let (code, read) = read_uvarint(bytes)?;
        let rest = &bytes[read..];
        let (size, read) = read_uvarint(rest)?;
        let digest = &rest[read..];
        if digest.len() != size as usize {
            return Err(CodecError::InvalidEncoding(format!(
                "multihash length field {} does not match {} digest bytes",
                size,
                digest.len()
            )));
        }
        Ok(Self {
            code,
            digest: digest.to_vec(),
        })
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multihash({:#04x}, {}, 0x{})",
            self.code,
            self.digest.len(),
            hex::encode(&self.digest)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vindex_crypto::fingerprint;

    #[test]
    fn sha2_256_wire_form_has_two_byte_header() {
        let mh = Multihash::sha2_256(&fingerprint("Cruise"));
        let bytes = mh.to_bytes();
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 0x12);
        assert_eq!(bytes[1], 0x20);
        assert_eq!(&bytes[2..], fingerprint("Cruise").as_bytes());
    }

    #[test]
    fn wire_form_round_trips() {
        let mh = Multihash::sha2_256(&fingerprint("Bolt"));
        let parsed = Multihash::from_bytes(&mh.to_bytes()).unwrap();
        assert_eq!(parsed, mh);
    }

    #[test]
    fn length_field_mismatch_is_rejected() {
        let mut bytes = Multihash::sha2_256(&fingerprint("Bolt")).to_bytes();
        bytes.push(0xff);
        assert!(Multihash::from_bytes(&bytes).is_err());
    }
}
