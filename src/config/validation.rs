//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value shapes (origin is an absolute URL, base path absolute)
//! - Validate value ranges (timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ConsoleConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use url::Url;

use crate::config::schema::ConsoleConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("api.origin `{origin}` is not an absolute http(s) URL")]
    InvalidOrigin { origin: String },

    #[error("api.base_path `{base_path}` must start with '/'")]
    RelativeBasePath { base_path: String },

    #[error("api.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level `{level}` is not one of trace/debug/info/warn/error")]
    UnknownLogLevel { level: String },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.origin) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidOrigin {
            origin: config.api.origin.clone(),
        }),
    }

    if !config.api.base_path.starts_with('/') {
        errors.push(ValidationError::RelativeBasePath {
            base_path: config.api.base_path.clone(),
        });
    }

    if config.api.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel {
            level: config.observability.log_level.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
