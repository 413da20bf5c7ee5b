//! Shared helpers.

/// Zone serial and timestamp formatting.
pub mod datetime;
