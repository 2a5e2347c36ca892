//! # API Error Types
//!
//! Every fallible call in this crate returns [`ApiResult`], and every failure
//! is sorted into one of the [`ApiError`] categories below. The till decides
//! what to do from the category alone:
//!
//! ```text
//! ┌────────────────────┬──────────────────────────────────────────────────┐
//! │ Category           │ Till behavior                                    │
//! ├────────────────────┼──────────────────────────────────────────────────┤
//! │ Network / Timeout  │ Show and retry later (recoverable)               │
//! │ SessionExpired     │ Prompt for login again                           │
//! │ NotFound           │ Show message ("Product not found")               │
//! │ Backend            │ Show the backend's own message verbatim          │
//! │ Decode / Config    │ Programming or deployment problem, show as-is    │
//! └────────────────────┴──────────────────────────────────────────────────┘
//! ```
//!
//! Backend error bodies look like `{"error": "Insufficient stock"}`. The
//! message is surfaced untouched so the cashier sees exactly what the server
//! said; when the body is not in that shape we fall back to "Unknown error".

use serde::Deserialize;

/// Result alias for all API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client construction or configuration failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Could not reach the backend at all.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend did not answer in time.
    #[error("Request timed out")]
    Timeout,

    /// The backend rejected our token (HTTP 401). The caller must log in
    /// again before retrying anything.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-success status. The message is the backend's own
    /// `error` field, verbatim.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The response arrived but was not the JSON we expected.
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Shape of a backend error body.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build an error from a non-success HTTP response.
    ///
    /// ## Behavior
    /// - 401 always means the session is gone, whatever the body says
    /// - 404 carries the backend message ("Product not found")
    /// - anything else keeps the status and the backend message
    /// - a body without an `error` field falls back to "Unknown error"
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 => Self::SessionExpired,
            404 => Self::NotFound { message },
            _ => Self::Backend { status, message },
        }
    }

    /// Whether retrying the same call later could succeed without any
    /// other action from the cashier.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }

    /// Whether the caller must re-authenticate before continuing.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_extracted_verbatim() {
        let err = ApiError::from_response(400, r#"{"error": "Insufficient stock"}"#);
        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Insufficient stock");
            }
            other => panic!("expected Backend, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_falls_back_to_unknown() {
        let err = ApiError::from_response(500, "<html>Internal Server Error</html>");
        assert_eq!(err.to_string(), "Unknown error");
    }

    #[test]
    fn test_missing_error_field_falls_back_to_unknown() {
        let err = ApiError::from_response(422, r#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), "Unknown error");
    }

    #[test]
    fn test_401_is_session_expired_regardless_of_body() {
        let err = ApiError::from_response(401, r#"{"error": "Token has expired"}"#);
        assert!(matches!(err, ApiError::SessionExpired));
        assert!(err.requires_login());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_404_keeps_backend_message() {
        let err = ApiError::from_response(404, r#"{"error": "Product not found"}"#);
        assert_eq!(err.to_string(), "Product not found");
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[test]
    fn test_network_and_timeout_are_recoverable() {
        assert!(ApiError::Network("connection refused".into()).is_recoverable());
        assert!(ApiError::Timeout.is_recoverable());
        assert!(!ApiError::Backend { status: 400, message: "bad".into() }.is_recoverable());
        assert!(!ApiError::SessionExpired.is_recoverable());
    }

    #[test]
    fn test_display_shows_backend_message_unprefixed() {
        let err = ApiError::Backend {
            status: 400,
            message: "Cart is empty".into(),
        };
        assert_eq!(err.to_string(), "Cart is empty");
    }
}
