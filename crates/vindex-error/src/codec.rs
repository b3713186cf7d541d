// Codec-specific error types
// These errors cover the content-identifier codec

use crate::{CryptoError, ErrorCode, ErrorDomain, VindexError};
use thiserror::Error;

/// Codec-specific error codes
pub mod codes {
    use crate::ErrorCode;

    // Codec error codes start with 2000
    pub const MALFORMED_IDENTIFIER: ErrorCode = ErrorCode(2001);
    pub const UNEXPECTED_SHAPE: ErrorCode = ErrorCode(2002);
    pub const INVALID_ENCODING: ErrorCode = ErrorCode(2003);
    pub const CRYPTO: ErrorCode = ErrorCode(2004);
}

/// Codec-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Stored bytes too short to reconstruct a content identifier
    #[error("Malformed identifier: {0} bytes is shorter than a multihash")]
    MalformedIdentifier(usize),

    /// Stored bytes do not carry the multihash shape the decode policy
    /// assumes; surfaced instead of returning a plausible-looking wrong CID
    #[error("Unexpected identifier shape: multihash header {code:#04x}/{size:#04x}")]
    UnexpectedShape { code: u8, size: u8 },

    /// A CID string or hex form could not be parsed
    #[error("Invalid identifier encoding: {0}")]
    InvalidEncoding(String),

    /// Bounding the identifier bytes failed
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl VindexError for CodecError {
    fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            CodecError::MalformedIdentifier(_) => MALFORMED_IDENTIFIER,
            CodecError::UnexpectedShape { .. } => UNEXPECTED_SHAPE,
            CodecError::InvalidEncoding(_) => INVALID_ENCODING,
            CodecError::Crypto(_) => CRYPTO,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Codec
    }
}

/// Convenient Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Convert from codec error to boxed error
impl From<CodecError> for Box<dyn VindexError> {
    fn from(err: CodecError) -> Self {
        Box::new(err)
    }
}
