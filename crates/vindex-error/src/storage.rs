// Storage-specific error types
// These errors cover the off-chain content store boundary

use crate::{ErrorCode, ErrorDomain, VindexError};
use thiserror::Error;

/// Storage-specific error codes
pub mod codes {
    use crate::ErrorCode;

    // Storage error codes start with 4000
    pub const STORE_UNAVAILABLE: ErrorCode = ErrorCode(4001);
    pub const NOT_FOUND: ErrorCode = ErrorCode(4002);
    pub const INVALID_RESPONSE: ErrorCode = ErrorCode(4003);
}

/// Storage-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The content store could not complete a round trip. Transient; any
    /// retry policy belongs to the caller, not this layer.
    #[error("Content store unavailable: {0}")]
    StoreUnavailable(String),

    /// No payload exists under the given content identifier
    #[error("Content not found: {0}")]
    NotFound(String),

    /// The store answered with something other than the expected shape
    #[error("Invalid store response: {0}")]
    InvalidResponse(String),
}

impl VindexError for StorageError {
    fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            StorageError::StoreUnavailable(_) => STORE_UNAVAILABLE,
            StorageError::NotFound(_) => NOT_FOUND,
            StorageError::InvalidResponse(_) => INVALID_RESPONSE,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Storage
    }

    fn is_transient(&self) -> bool {
        matches!(self, StorageError::StoreUnavailable(_))
    }
}

/// Convenient Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Convert from storage error to boxed error
impl From<StorageError> for Box<dyn VindexError> {
    fn from(err: StorageError) -> Self {
        Box::new(err)
    }
}

// Helper methods for creating storage errors
impl StorageError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        StorageError::StoreUnavailable(message.into())
    }
}
