//! Error types used throughout the connector

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Responsys connector
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum ResponsysError {
    /// Caller-supplied arguments violate a precondition. Raised before any
    /// remote call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service raised a fault. `message` is the composed
    /// `"{type}: {exceptionMessage}"` string, `code` the classified code.
    #[error("{message}")]
    RemoteFault { message: String, code: String },

    /// A success envelope carried a non-empty `errorMessage`.
    #[error("{0}")]
    EmbeddedError(String),

    /// A request could not be encoded or a response did not have the
    /// expected shape.
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Responsys integration is disabled")]
    Disabled,
}

impl ResponsysError {
    /// Classified remote code, when this error came from a remote fault.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::RemoteFault { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Shorthand used by validation paths.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, ResponsysError>;
