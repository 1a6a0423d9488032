//! API failure kinds surfaced to callers.

use std::time::Duration;

/// Failure of an API request.
///
/// Interceptor error handlers receive these and may recover; with the
/// default (empty) chains every failure propagates unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response arrived within the configured deadline.
    #[error("request timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },

    /// The transport failed before a response was produced.
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    /// The request could not be built at all.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Classify a transport failure from the underlying client.
    pub(crate) fn from_transport(source: reqwest::Error, elapsed: Duration) -> Self {
        if source.is_timeout() {
            ApiError::Timeout { elapsed }
        } else {
            ApiError::Network { source }
        }
    }

    /// Status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
