//! Error types for the pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every failure is fatal: the fetch loop never retries and
//! never returns partial results.

/// Errors from the E-utilities client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Unparsable esearch JSON envelope
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }
}

/// Errors from the fetch/filter pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Error from the E-utilities client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Unparsable efetch XML payload
    #[error("Malformed record payload: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Create a malformed-response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for fetch pipeline operations.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::status(502, "bad gateway");
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_client_error_wraps_into_fetch_error() {
        let err: FetchError = ClientError::status(404, "not found").into();
        assert!(matches!(err, FetchError::Client(ClientError::Status { status: 404, .. })));
    }

    #[test]
    fn test_malformed_error_message() {
        let err = FetchError::malformed("unexpected EOF at line 3");
        assert!(err.to_string().contains("unexpected EOF"));
    }
}
