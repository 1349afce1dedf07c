//! Model error type.

use thiserror::Error;

/// Result type used by the parsing helpers in this crate.
pub type ModelResult<T> = Result<T, ModelError>;

/// Failure to interpret a value received from (or destined for) the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An identifier was empty or otherwise unusable.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A status flag outside the known set.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// A timestamp in neither of the accepted formats.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl ModelError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_status(msg: impl Into<String>) -> Self {
        Self::InvalidStatus(msg.into())
    }

    pub fn invalid_timestamp(msg: impl Into<String>) -> Self {
        Self::InvalidTimestamp(msg.into())
    }
}
