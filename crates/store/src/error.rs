//! Store adapter error type.
//!
//! Every adapter failure is reported through [`StoreError`]; nothing is
//! retried automatically and no failure is fatal to the process. The one
//! error that changes control flow is [`StoreError::Unavailable`]: raised by
//! the startup probe, it selects the local fallback backend.

use minishop_core::FieldError;
use thiserror::Error;

/// Errors from store adapter operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record failed field validation before being written.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldError),

    /// An update or delete referenced an absent id.
    ///
    /// Both backends return this consistently (the remote database checks
    /// the record path before patching; the local store scans its file).
    #[error("no {collection} record with id {id}")]
    NotFound {
        collection: &'static str,
        id: String,
    },

    /// The remote backend did not answer the startup probe.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// HTTP transport failure talking to the remote backend.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure in the local backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The remote backend answered with a payload we do not understand.
    #[error("unexpected backend response: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
