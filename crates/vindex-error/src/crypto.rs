// Crypto-specific error types
// These errors cover the fingerprint encoder and bounded vectors

use crate::{ErrorCode, ErrorDomain, VindexError};
use thiserror::Error;

/// Crypto-specific error codes
pub mod codes {
    use crate::ErrorCode;

    // Crypto error codes start with 1000
    pub const LENGTH_EXCEEDED: ErrorCode = ErrorCode(1001);
    pub const INVALID_DIGEST_LENGTH: ErrorCode = ErrorCode(1002);
    pub const INVALID_FORMAT: ErrorCode = ErrorCode(1003);
    pub const UNSUPPORTED_ALGORITHM: ErrorCode = ErrorCode(1004);
}

/// Crypto-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Input exceeds a fixed-capacity bound; always a caller error
    #[error("Bounded vector length exceeded: {0}")]
    LengthExceeded(usize),

    /// Digest output had an unexpected length
    #[error("Invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    /// Invalid hash string format
    #[error("Invalid hash format")]
    InvalidFormat,

    /// Unsupported hash algorithm
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl VindexError for CryptoError {
    fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            CryptoError::LengthExceeded(_) => LENGTH_EXCEEDED,
            CryptoError::InvalidDigestLength { .. } => INVALID_DIGEST_LENGTH,
            CryptoError::InvalidFormat => INVALID_FORMAT,
            CryptoError::UnsupportedAlgorithm(_) => UNSUPPORTED_ALGORITHM,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Crypto
    }
}

/// Convenient Result type for crypto operations
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Convert from crypto error to boxed error
impl From<CryptoError> for Box<dyn VindexError> {
    fn from(err: CryptoError) -> Self {
        Box::new(err)
    }
}
