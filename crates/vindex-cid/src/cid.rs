// Content identifier type
//
// A self-describing content address: version, content codec, multihash.
// Two representations round-trip: the human-readable string form
// (base58btc for v0, multibase base32lower for v1) and the compact byte
// form. Values are immutable once constructed.

use std::fmt;
use std::str::FromStr;

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};

use vindex_error::{CodecError, CodecResult};

use crate::multihash::{Multihash, MULTIHASH_SHA2_256};
use crate::varint::{read_uvarint, write_uvarint};

/// Multicodec content type for MerkleDAG protobuf, the tag IPFS pinning
/// services use for wrapped JSON payloads
pub const CODEC_DAG_PB: u64 = 0x70;

/// Multicodec content type for raw binary payloads
pub const CODEC_RAW: u64 = 0x55;

/// CID version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// Implicit dag-pb + base58btc form ("Qm...")
    V0,
    /// Self-describing multibase form
    V1,
}

/// A content identifier
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cid {
    version: Version,
    codec: u64,
    multihash: Multihash,
}

impl Cid {
    /// Create a v0 identifier
    ///
    /// v0 only exists for SHA2-256/32-byte digests with the implicit dag-pb
    /// codec; anything else is rejected.
    pub fn v0(multihash: Multihash) -> CodecResult<Self> {
        if multihash.code() != MULTIHASH_SHA2_256 || multihash.size() != 32 {
            return Err(CodecError::InvalidEncoding(
                "v0 identifiers require a 32-byte SHA2-256 multihash".to_string(),
            ));
        }
        Ok(Self {
            version: Version::V0,
            codec: CODEC_DAG_PB,
            multihash,
        })
    }

    /// Create a v1 identifier with an explicit content codec
    pub fn v1(codec: u64, multihash: Multihash) -> Self {
        Self {
            version: Version::V1,
            codec,
            multihash,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn codec(&self) -> u64 {
        self.codec
    }

    pub fn multihash(&self) -> &Multihash {
        &self.multihash
    }

    /// The compact byte form
    ///
    /// v0 is its bare multihash; v1 prefixes version and codec varints.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.version {
            Version::V0 => self.multihash.to_bytes(),
            Version::V1 => {
                let mut out = Vec::new();
                write_uvarint(1, &mut out);
                write_uvarint(self.codec, &mut out);
                out.extend_from_slice(&self.multihash.to_bytes());
                out
            }
        }
    }

    /// Parse the compact byte form
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        // A v0 byte form is exactly a 34-byte SHA2-256 multihash
        if bytes.len() == 34 && bytes[0] == 0x12 && bytes[1] == 0x20 {
            return Cid::v0(Multihash::from_bytes(bytes)?);
        }
        let (version, read) = read_uvarint(bytes)?;
        if version != 1 {
            return Err(CodecError::InvalidEncoding(format!(
                "unsupported CID version {}",
                version
            )));
        }
        let rest = &bytes[read..];
        let (codec, read) = read_uvarint(rest)?;
        let multihash = Multihash::from_bytes(&rest[read..])?;
        Ok(Cid::v1(codec, multihash))
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Version::V0 => write!(f, "{}", bs58::encode(self.to_bytes()).into_string()),
            Version::V1 => {
                // Multibase prefix 'b' marks base32lower; the RFC 4648
                // alphabet is case-insensitive so encode upper and fold.
                let encoded = BASE32_NOPAD.encode(&self.to_bytes()).to_ascii_lowercase();
                write!(f, "b{}", encoded)
            }
        }
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cid({:?}, {:#04x}, {:?})",
            self.version, self.codec, self.multihash
        )
    }
}

impl FromStr for Cid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("Qm") && s.len() == 46 {
            let bytes = bs58::decode(s)
                .into_vec()
                .map_err(|e| CodecError::InvalidEncoding(e.to_string()))?;
            return Cid::v0(Multihash::from_bytes(&bytes)?);
        }
        if let Some(body) = s.strip_prefix('b') {
            let bytes = BASE32_NOPAD
                .decode(body.to_ascii_uppercase().as_bytes())
                .map_err(|e| CodecError::InvalidEncoding(e.to_string()))?;
            return Cid::from_bytes(&bytes);
        }
        Err(CodecError::InvalidEncoding(format!(
            "unrecognized CID string: {}",
            s
        )))
    }
}
