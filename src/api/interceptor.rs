//! Request and response interceptor chains.
//!
//! # Responsibilities
//! - Define the hook traits for outgoing configs and incoming responses
//! - Fold a value through a chain in registration order
//! - Ship the stock interceptors (bearer auth, request ID)
//!
//! # Design Decisions
//! - Each interceptor is a (success handler, error handler) pair; the
//!   default implementations pass through and re-raise
//! - A failure anywhere in a chain flows to the error handlers of the
//!   remaining interceptors, which may recover it
//! - No stock interceptor is installed by default

use std::sync::Arc;

use crate::api::client::{ApiResponse, RequestConfig};
use crate::api::error::ApiError;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Hook invoked on every outgoing request configuration.
pub trait RequestInterceptor: Send + Sync {
    /// Success handler: receives the config, returns it possibly modified.
    fn on_request(&self, config: RequestConfig) -> Result<RequestConfig, ApiError> {
        Ok(config)
    }

    /// Error handler: receives a failure from earlier in the chain and may
    /// recover by producing a config.
    fn on_request_error(&self, error: ApiError) -> Result<RequestConfig, ApiError> {
        Err(error)
    }
}

/// Hook invoked on every incoming response.
pub trait ResponseInterceptor: Send + Sync {
    /// Success handler: receives the response, returns it possibly modified.
    fn on_response(&self, response: ApiResponse) -> Result<ApiResponse, ApiError> {
        Ok(response)
    }

    /// Error handler: receives the request's failure and may recover by
    /// producing a response.
    fn on_response_error(&self, error: ApiError) -> Result<ApiResponse, ApiError> {
        Err(error)
    }
}

pub(crate) fn run_request_chain(
    interceptors: &[Arc<dyn RequestInterceptor>],
    initial: Result<RequestConfig, ApiError>,
) -> Result<RequestConfig, ApiError> {
    interceptors.iter().fold(initial, |acc, interceptor| {
        match acc {
            Ok(config) => interceptor.on_request(config),
            Err(error) => interceptor.on_request_error(error),
        }
    })
}

pub(crate) fn run_response_chain(
    interceptors: &[Arc<dyn ResponseInterceptor>],
    initial: Result<ApiResponse, ApiError>,
) -> Result<ApiResponse, ApiError> {
    interceptors.iter().fold(initial, |acc, interceptor| {
        match acc {
            Ok(response) => interceptor.on_response(response),
            Err(error) => interceptor.on_response_error(error),
        }
    })
}

/// Attaches `Authorization: Bearer <token>` to every request.
///
/// Available for builds that keep a session token; not installed by
/// default.
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, mut config: RequestConfig) -> Result<RequestConfig, ApiError> {
        config
            .headers
            .push(("authorization".to_string(), format!("Bearer {}", self.token)));
        Ok(config)
    }
}

/// Attaches a fresh UUID v4 `x-request-id` header to every request.
pub struct RequestId;

impl RequestInterceptor for RequestId {
    fn on_request(&self, mut config: RequestConfig) -> Result<RequestConfig, ApiError> {
        config
            .headers
            .push((X_REQUEST_ID.to_string(), uuid::Uuid::new_v4().to_string()));
        Ok(config)
    }
}
