//! Client-side core of the admin console.
//!
//! Provides the two pieces every build of the console shares: the
//! declarative navigation route table (with lazily loaded views) and the
//! configured HTTP API client with its interceptor chains. View rendering,
//! session state, and backend API semantics live elsewhere.

pub mod api;
pub mod config;
pub mod observability;
pub mod routing;

pub use api::{ApiClient, ApiError, ApiResponse, RequestConfig};
pub use config::ConsoleConfig;
pub use routing::{Resolution, Route, RouteTable};
