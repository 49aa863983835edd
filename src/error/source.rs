//! Data-source errors.

use thiserror::Error;

/// Failure while retrieving a measurement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source did not answer within the fetch timeout.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The source answered with a non-2xx status.
    #[error("server returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The payload could not be interpreted.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// The source is unreachable or refused the request.
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Message suitable for the failure toast.
    pub fn user_message(&self) -> String {
        "Could not retrieve air quality information".to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Timeout { .. } => "SOURCE_TIMEOUT",
            SourceError::HttpStatus { .. } => "SOURCE_HTTP_STATUS",
            SourceError::Malformed(_) => "SOURCE_MALFORMED",
            SourceError::Unavailable(_) => "SOURCE_UNAVAILABLE",
        }
    }

    /// Whether a later manual retry is likely to succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SourceError::Timeout { .. } | SourceError::Unavailable(_) => true,
            SourceError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            SourceError::Malformed(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SourceError::Timeout { duration_ms: 1500 }.to_string(),
            "request timed out after 1500ms"
        );
        assert_eq!(
            SourceError::HttpStatus {
                status: 503,
                message: "busy".to_string()
            }
            .to_string(),
            "server returned status 503: busy"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(SourceError::Timeout { duration_ms: 1 }.is_retryable());
        assert!(SourceError::Unavailable("x".to_string()).is_retryable());
        assert!(SourceError::HttpStatus {
            status: 502,
            message: String::new()
        }
        .is_retryable());
        assert!(!SourceError::HttpStatus {
            status: 404,
            message: String::new()
        }
        .is_retryable());
        assert!(!SourceError::Malformed("bad".to_string()).is_retryable());
    }
}
