//! Cross-cutting observability.
//!
//! Structured logging via `tracing`; the shell logs route resolutions and
//! request outcomes at debug, validation failures at error.

pub mod logging;

pub use logging::init_tracing;
