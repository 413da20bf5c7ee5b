//! # dnsctl-provider
//!
//! Typed client for the SoftLayer DNS REST API.
//!
//! The crate exposes one async trait, [`DnsProvider`], covering the zone and resource
//! record calls `dnsctl` needs, plus [`create_provider`] to build an implementation from
//! [`ProviderCredentials`].
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsctl_provider::{create_provider, DnsProvider, ProviderCredentials, RecordFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Softlayer {
//!         username: "SL123456".to_string(),
//!         api_key: "your-api-key".to_string(),
//!         endpoint_url: None,
//!     })?;
//!
//!     let ids = provider.find_zone_ids("example.com").await?;
//!     if let [id] = ids.as_slice() {
//!         for record in provider.list_records(id, &RecordFilter::by_host("www")).await? {
//!             println!("{} {} {}", record.host, record.record_type, record.data);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! API exceptions are mapped onto structured variants:
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::ZoneNotFound`] / [`ProviderError::RecordNotFound`]: object not found
//! - [`ProviderError::InvalidParameter`]: the API rejected a value
//! - [`ProviderError::NetworkError`]: network connectivity issue
//!
//! Requests are never retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CreateRecordRequest, CredentialValidationError, DnsRecord, ProviderCredentials,
    ProviderType, RecordFilter, Zone,
};

// Re-export utils module
pub use utils::datetime;

pub use providers::SoftlayerProvider;
