//! Error types for the validator bridge.
//!
//! Validation outcomes (PASS, FAIL, individual findings) are never errors.
//! Everything here is an integration fault: the engine was not ready, its
//! bytes did not decode, a fetch went wrong, or the caller asked for something
//! the bridge refuses to do.

use std::sync::Arc;

use thiserror::Error;

/// Boxed source error coming from an external seam (engine, loader, fetcher).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Source error handed to every caller that waited on the same failed load
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the validator bridge
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// An operation needing the engine ran before `init()` completed
    #[error("validation engine is not initialized; call init() first")]
    EngineUninitialized,

    #[error("failed to load validation engine: {0}")]
    EngineLoad(#[source] SharedError),

    #[error("engine call '{operation}' failed: {source}")]
    Engine {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("failed to decode engine wire bytes: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Cache URLs do not map back to an authored source document
    #[error("refusing to validate cache URL '{0}'; validate the origin document instead")]
    KnownCacheUrl(String),

    #[error("fetching '{url}' returned HTTP status {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("fetching '{url}' failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("invalid enum table: {0}")]
    InvalidEnumTable(String),
}

impl ValidatorError {
    pub(crate) fn engine(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Engine {
            operation,
            source: source.into(),
        }
    }
}

/// Result type for validator bridge operations
pub type Result<T> = std::result::Result<T, ValidatorError>;
