// Vindex Error Handling Framework
// Central location for error types, traits, and handling utilities

use std::error::Error as StdError;
use std::fmt;

// Re-export common error handling tools for convenience
pub use thiserror;

// Per-area error modules
mod chain;
mod codec;
mod crypto;
mod storage;

pub use chain::{ChainError, ChainResult};
pub use codec::{CodecError, CodecResult};
pub use crypto::{CryptoError, CryptoResult};
pub use storage::{StorageError, StorageResult};

/// Error domains representing different components of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorDomain {
    Crypto,
    Codec,
    Chain,
    Storage,
    External,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDomain::Crypto => write!(f, "crypto"),
            ErrorDomain::Codec => write!(f, "codec"),
            ErrorDomain::Chain => write!(f, "chain"),
            ErrorDomain::Storage => write!(f, "storage"),
            ErrorDomain::External => write!(f, "external"),
        }
    }
}

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Standard error message format for serialization
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub domain: ErrorDomain,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Base trait for all errors in the Vindex system.
pub trait VindexError: StdError + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Returns the numeric code for this error.
    fn code(&self) -> ErrorCode;

    /// Returns the component domain the error belongs to.
    fn domain(&self) -> ErrorDomain;

    /// Indicates if the error is temporary and retrying might succeed.
    fn is_transient(&self) -> bool {
        false
    }

    /// Converts the error into a serializable message.
    fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.code(),
            domain: self.domain(),
            message: format!("{}", self),
            details: None,
        }
    }

    /// Converts the error into a boxed trait object.
    fn into_boxed(self) -> BoxError
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

/// Shorthand for a boxed VindexError
pub type BoxError = Box<dyn VindexError>;

/// Standard Result type using BoxError
pub type Result<T> = std::result::Result<T, BoxError>;
