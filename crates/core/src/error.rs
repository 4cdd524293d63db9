//! Error types for DigiBot.
//!
//! Two enums live here:
//! - [`ApiError`] is the single failure signal of the remote generation
//!   capability. The responder always recovers from it.
//! - [`AppError`] covers everything the binary can actually fail on:
//!   configuration, I/O, corpus loading and serialization.

use thiserror::Error;

/// Failure reported by a remote generation provider.
///
/// Every non-success outcome of a remote call collapses into one of these
/// variants, including transport timeouts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No API key is configured for the provider
    #[error("API key not set")]
    MissingCredential,

    /// The request never produced an HTTP response (DNS, TLS, timeout, ...)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The provider answered 2xx but the body could not be decoded
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl ApiError {
    /// Whether the provider rejected the credential itself.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ApiError::MissingCredential => true,
            ApiError::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

/// Unified error type for DigiBot.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// FAQ corpus loading and validation errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
