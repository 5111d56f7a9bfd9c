//! Error taxonomy shared by the catalog, completion, reconciliation and
//! persistence layers.
//!
//! Not every failure surfaces to the user: a [`CompletionError`] or a
//! malformed completion is recovered by the fallback selector, while
//! [`Error::SourceUnavailable`] for the catalog and
//! [`Error::PersistenceFailure`] are reported.

use thiserror::Error;

use crate::curator::Rejection;

#[derive(Debug, Error)]
pub enum Error {
    /// Catalog or completion service unreachable or unauthenticated.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Completion text received but unparseable, unrepairable or schema-invalid.
    #[error("Malformed completion: {0}")]
    MalformedCompletion(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::SourceUnavailable(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::PersistenceFailure(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::PersistenceFailure(format!("Serialization error: {}", e))
    }
}

impl From<Rejection> for Error {
    fn from(r: Rejection) -> Self {
        Error::MalformedCompletion(r.to_string())
    }
}

/// Failure of a single call to the generative completion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,

    #[error("completion service rejected the credentials: {0}")]
    Unauthenticated(String),

    #[error("completion quota exhausted: {0}")]
    Quota(String),

    #[error("completion blocked by content filter: {0}")]
    Blocked(String),

    #[error("completion service error {status}: {body}")]
    Service { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("completion service returned no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::Network(e.to_string())
        }
    }
}
