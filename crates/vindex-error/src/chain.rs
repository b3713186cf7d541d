// Chain-specific error types
// These errors cover the chain oracle boundary and the block resolver

use crate::{ErrorCode, ErrorDomain, VindexError};
use thiserror::Error;

/// Chain-specific error codes
pub mod codes {
    use crate::ErrorCode;

    // Chain error codes start with 3000
    pub const UNAVAILABLE: ErrorCode = ErrorCode(3001);
    pub const EMPTY_CHAIN: ErrorCode = ErrorCode(3002);
    pub const CANCELLED: ErrorCode = ErrorCode(3003);
    pub const SUBMISSION_REJECTED: ErrorCode = ErrorCode(3004);
}

/// Chain-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The chain client could not complete a round trip. Transient; any
    /// retry policy belongs to the caller, not this layer.
    #[error("Chain unavailable: {0}")]
    Unavailable(String),

    /// The chain has no blocks to search
    #[error("Chain has no blocks")]
    EmptyChain,

    /// The operation was cancelled between probes
    #[error("Operation cancelled")]
    Cancelled,

    /// A ledger write was rejected before finalization
    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),
}

impl VindexError for ChainError {
    fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            ChainError::Unavailable(_) => UNAVAILABLE,
            ChainError::EmptyChain => EMPTY_CHAIN,
            ChainError::Cancelled => CANCELLED,
            ChainError::SubmissionRejected(_) => SUBMISSION_REJECTED,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Chain
    }

    fn is_transient(&self) -> bool {
        matches!(self, ChainError::Unavailable(_))
    }
}

/// Convenient Result type for chain operations
pub type ChainResult<T> = Result<T, ChainError>;

/// Convert from chain error to boxed error
impl From<ChainError> for Box<dyn VindexError> {
    fn from(err: ChainError) -> Self {
        Box::new(err)
    }
}

// Helper methods for creating chain errors
impl ChainError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        ChainError::Unavailable(message.into())
    }

    /// Create a new submission-rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        ChainError::SubmissionRejected(message.into())
    }
}
