//! HTTP API client subsystem.
//!
//! # Data Flow
//! ```text
//! RequestConfig
//!     → interceptor.rs (request chain, registration order)
//!     → client.rs (join base path, send with deadline)
//!     → classify failure (timeout / network / status)
//!     → interceptor.rs (response chain)
//!     → ApiResponse or ApiError
//! ```
//!
//! # Design Decisions
//! - One client per process, constructed at startup, shared via Arc
//! - Interceptor chains are fixed after construction
//! - Default chains are empty: configs and responses pass through unchanged

pub mod client;
pub mod error;
pub mod interceptor;

use std::sync::Arc;
use std::sync::OnceLock;

pub use client::{ApiClient, ApiClientBuilder, ApiResponse, RequestConfig};
pub use error::ApiError;
pub use interceptor::{
    BearerAuth, RequestId, RequestInterceptor, ResponseInterceptor, X_REQUEST_ID,
};

static GLOBAL: OnceLock<Arc<ApiClient>> = OnceLock::new();

/// Install the process-wide client.
///
/// Call once at startup for call sites that cannot take the client by
/// injection. Returns `false` if a client was already installed; the
/// original stays in place.
pub fn install(client: Arc<ApiClient>) -> bool {
    GLOBAL.set(client).is_ok()
}

/// The process-wide client, if one has been installed.
pub fn global() -> Option<Arc<ApiClient>> {
    GLOBAL.get().cloned()
}
