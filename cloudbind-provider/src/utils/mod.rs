//! Utility modules.

/// Date/time serialization helpers shared by providers.
pub mod datetime;

/// Serde helpers for numbers that arrive either as JSON numbers or strings.
#[cfg(feature = "glesys")]
pub mod lenient;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
