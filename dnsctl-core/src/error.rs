//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dnsctl_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The zone file does not start with a valid `$ORIGIN` directive
    #[error("Format error: {0}")]
    FormatError(String),

    /// The zone named by the import could neither be found nor created
    #[error("Unable to resolve zone '{zone}': {reason}")]
    ZoneResolution { zone: String, reason: String },

    /// No zone with that name exists on the account
    #[error("Unable to find zone '{0}'")]
    ZoneNotFound(String),

    /// More than one zone carries that name
    #[error("Multiple zones found for '{zone}' ({count} matches), use the zone id instead")]
    AmbiguousZone { zone: String, count: usize },

    /// Reading the zone file failed
    #[error("Unable to read '{path}': {message}")]
    Io { path: String, message: String },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FormatError(_)
            | Self::ZoneNotFound(_)
            | Self::AmbiguousZone { .. }
            | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::ZoneResolution { .. } | Self::Io { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
