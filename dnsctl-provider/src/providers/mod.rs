//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod softlayer;

pub use softlayer::SoftlayerProvider;
