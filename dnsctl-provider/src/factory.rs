//! Provider factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::SoftlayerProvider;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// Credentials are validated first; blank fields are rejected before any request is made.
///
/// # Examples
///
/// ```rust,no_run
/// use dnsctl_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Softlayer {
///     username: "SL123456".to_string(),
///     api_key: "your-api-key".to_string(),
///     endpoint_url: None,
/// }).unwrap();
/// ```
///
/// # Errors
///
/// Returns [`ProviderError::InvalidCredentials`] when a required field is blank.
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    if let Err(e) = credentials.validate() {
        return Err(ProviderError::InvalidCredentials {
            provider: credentials.provider_type().to_string(),
            raw_message: Some(e.to_string()),
        });
    }

    match credentials {
        ProviderCredentials::Softlayer {
            username,
            api_key,
            endpoint_url,
        } => Ok(Arc::new(SoftlayerProvider::new(
            username,
            api_key,
            endpoint_url,
        ))),
    }
}
