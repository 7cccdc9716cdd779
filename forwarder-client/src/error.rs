//! Error types for the backend client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network unreachable, DNS failure, connection reset, ...
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status code
    #[error("HTTP error! Status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics only
        body: String,
    },

    /// Response body is not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create a status error from status code and body
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code() {
        let err = ClientError::status(500, "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP error! Status: 500");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_decode_message() {
        let err = ClientError::Decode("missing field `logs`".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to parse response: missing field `logs`"
        );
        assert_eq!(err.status_code(), None);
    }
}
