//! Utility modules.

/// Timestamp serialization helpers for API payloads.
pub mod datetime;

/// Log sanitization utilities that keep large bodies out of the logs.
pub mod log_sanitizer;
