//! Client error model.
//!
//! Nothing here is recovered locally: each variant is what the caller gets
//! back from the operation that failed.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP status and envelope code the backend uses for an expired or missing
/// session.
const UNAUTHORIZED: u16 = 401;

/// Longest body excerpt kept in [`ApiError::Status`], in chars.
pub const STATUS_BODY_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, broken body).
    #[error("network error: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    /// Non-2xx HTTP status. `body` is the whitespace-collapsed start of the
    /// response, cut after [`STATUS_BODY_PREVIEW_CHARS`] chars.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered with an envelope whose code is not success.
    #[error("backend error {code}: {msg}")]
    Business { code: i64, msg: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the session is missing or expired, either at HTTP level or in
    /// the envelope.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => *status == UNAUTHORIZED,
            ApiError::Business { code, .. } => *code == i64::from(UNAUTHORIZED),
            _ => false,
        }
    }

    /// Backend-provided message, if the failure came from the backend.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Business { msg, .. } => Some(msg),
            ApiError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_detected_at_both_levels() {
        let http = ApiError::Status { status: 401, body: String::new() };
        let envelope = ApiError::Business { code: 401, msg: "token expired".to_string() };
        let other = ApiError::Business { code: 500, msg: "boom".to_string() };

        assert!(http.is_unauthorized());
        assert!(envelope.is_unauthorized());
        assert!(!other.is_unauthorized());
        assert!(!ApiError::Transport("refused".to_string()).is_unauthorized());
    }

    #[test]
    fn backend_message_only_for_backend_failures() {
        let err = ApiError::Business { code: 500, msg: "username taken".to_string() };
        assert_eq!(err.backend_message(), Some("username taken"));
        assert_eq!(ApiError::Status { status: 502, body: String::new() }.backend_message(), None);
        assert_eq!(ApiError::decode("bad").backend_message(), None);
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = ApiError::Business { code: 10001, msg: "role in use".to_string() };
        assert_eq!(err.to_string(), "backend error 10001: role in use");
    }
}
