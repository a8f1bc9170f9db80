//! Error type surfaced by the fetch collaborator.

use thiserror::Error;

/// Errors that can occur while talking to the nations backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout: nothing came back.
    #[error("Could not reach '{url}': {reason}")]
    Unreachable { url: String, reason: String },

    /// The backend answered with a non-success status.
    #[error("'{url}' responded with HTTP {status}")]
    Http { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Unexpected response body from '{url}': {reason}")]
    Decode { url: String, reason: String },

    /// The request URL could not be assembled.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client itself could not be built.
    #[error("Failed to build HTTP client: {reason}")]
    Client { reason: String },
}

impl ApiError {
    /// HTTP-like status class: `0` when the network failed, the response
    /// status for HTTP errors, `200` when a successful response could not
    /// be decoded, and `400` for problems building the request locally.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unreachable { .. } => 0,
            ApiError::Http { status, .. } => *status,
            ApiError::Decode { .. } => 200,
            ApiError::InvalidUrl { .. } | ApiError::Client { .. } => 400,
        }
    }

    /// Whether the failure happened before any response arrived.
    pub fn is_network(&self) -> bool {
        self.status() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_has_status_zero() {
        let err = ApiError::Unreachable {
            url: "http://localhost:1/countries".into(),
            reason: "connection refused".into(),
        };
        assert_eq!(err.status(), 0);
        assert!(err.is_network());
    }

    #[test]
    fn http_error_keeps_status() {
        let err = ApiError::Http {
            url: "http://x/countries".into(),
            status: 503,
        };
        assert_eq!(err.status(), 503);
        assert!(!err.is_network());
        assert!(err.to_string().contains("503"));
    }
}
