// Fixed-shape identifier codec
//
// Bridges CID strings and the ledger's fixed-capacity identifier vectors.
// The ledger stores a CID's multihash bytes, zero-padded to the schema
// capacity; reconstruction reads back only the leading multihash window and
// assumes the SHA2-256 shape. That truncation rule is a compatibility
// contract with the original registry deployment, so it lives here as a
// named policy rather than inline slicing.

use std::str::FromStr;

use vindex_crypto::{bound, BoundedBytes};
use vindex_error::{CodecError, CodecResult};
use vindex_types::EncodingLimits;

use crate::cid::{Cid, CODEC_DAG_PB};
use crate::multihash::Multihash;

/// Decode policy: every stored identifier is assumed to be a 2-byte
/// SHA2-256 multihash header plus a 32-byte digest
///
/// Encoding stores a CID's multihash, bounded to the identifier capacity.
/// Decoding examines exactly the first `stored_multihash_len` bytes (34 by
/// default) and ignores everything after them, which is how the zero
/// padding added by the bound is discarded. Stored values that do not carry
/// the assumed header are rejected with [`CodecError::UnexpectedShape`]
/// instead of being bent into a plausible-looking wrong CID.
///
/// `decode(encode(x)) == x` exactly when `x` is a v1 CID carrying a
/// 32-byte SHA2-256 multihash under this policy's codec tag. A v0 input
/// stores the same multihash and decodes to its v1 rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedShapeCidDecode {
    limits: EncodingLimits,
    codec: u64,
}

impl FixedShapeCidDecode {
    /// Create a policy over the given encoding limits, reconstructing with
    /// the dag-pb codec tag
    pub fn new(limits: EncodingLimits) -> Self {
        Self {
            limits,
            codec: CODEC_DAG_PB,
        }
    }

    /// Override the codec tag used for reconstruction
    pub fn with_codec(mut self, codec: u64) -> Self {
        self.codec = codec;
        self
    }

    /// The encoding limits this policy enforces
    pub fn limits(&self) -> EncodingLimits {
        self.limits
    }

    /// Convert a CID string into the ledger-resident identifier vector
    ///
    /// Fails with `LengthExceeded` when the multihash does not fit the
    /// identifier capacity; never truncates.
    pub fn cid_to_stored_bytes(&self, cid_str: &str) -> CodecResult<BoundedBytes> {
        let cid = Cid::from_str(cid_str)?;
        let bytes = cid.multihash().to_bytes();
        Ok(bound(&bytes, self.limits.identifier_len)?)
    }

    /// Reconstruct a CID string from a stored identifier vector
    pub fn stored_bytes_to_cid(&self, stored: &[u8]) -> CodecResult<String> {
        let window_len = self.limits.stored_multihash_len;
        // The window must hold a 2-byte header plus at least one digest
        // byte, and its digest length must fit the multihash size field
        if window_len < 3 || window_len - 2 > usize::from(u8::MAX) {
            return Err(CodecError::InvalidEncoding(format!(
                "unusable multihash window length {}",
                window_len
            )));
        }
        if stored.len() < window_len {
            return Err(CodecError::MalformedIdentifier(stored.len()));
        }

        // Only the leading window participates; bytes beyond it are padding
        let window = &stored[..window_len];
        let expected_size = (window_len - 2) as u8;
        if window[0] != 0x12 || window[1] != expected_size {
            return Err(CodecError::UnexpectedShape {
                code: window[0],
                size: window[1],
            });
        }

        let multihash = Multihash::from_bytes(window)?;
        Ok(Cid::v1(self.codec, multihash).to_string())
    }

    /// Reconstruct a CID string from the chain's hex representation of a
    /// stored identifier, with or without a `0x` prefix
    pub fn stored_bytes_to_cid_hex(&self, hex_form: &str) -> CodecResult<String> {
        let trimmed = hex_form.strip_prefix("0x").unwrap_or(hex_form);
        let bytes =
            hex::decode(trimmed).map_err(|e| CodecError::InvalidEncoding(e.to_string()))?;
        self.stored_bytes_to_cid(&bytes)
    }
}

impl Default for FixedShapeCidDecode {
    fn default() -> Self {
        Self::new(EncodingLimits::default())
    }
}
