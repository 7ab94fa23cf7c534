//! Transit upstream error types.

use thiserror::Error;

/// Result type for upstream transit operations.
pub type TransitResult<T> = Result<T, TransitError>;

/// Errors that can occur while querying the upstream transit service.
///
/// None of these are retried internally; every failure is reported to the
/// invoking caller with the status or cause attached.
#[derive(Debug, Error)]
pub enum TransitError {
    /// The upstream service answered with a non-success HTTP status.
    #[error("upstream request failed: {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// The upstream service could not be reached at the network level.
    #[error("upstream unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The bounded per-request timeout elapsed.
    #[error("upstream request timed out")]
    Timeout,

    /// The response body did not match the declared shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl TransitError {
    /// Build the error for a non-success status.
    pub fn request_failed(status: reqwest::StatusCode) -> Self {
        Self::RequestFailed {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// Classify a transport-level reqwest error. Timeouts get their own
    /// variant; everything else counts as unreachable.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unreachable(err)
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_carries_status_and_text() {
        let err = TransitError::request_failed(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "upstream request failed: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_timeout_has_no_status() {
        assert_eq!(TransitError::Timeout.status(), None);
    }
}
