//! SoftLayer DNS Provider
//!
//! Talks to the `SoftLayer_Dns_Domain` and `SoftLayer_Dns_Domain_ResourceRecord` services
//! through the REST gateway with HTTP basic authentication.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{SoftlayerDomain, SoftlayerErrorBody, SoftlayerRecord};

/// Public REST endpoint.
pub(crate) const SL_API_BASE: &str = "https://api.softlayer.com/rest/v3.1";

/// Object mask for zone listings.
pub(crate) const ZONE_MASK: &str = "mask[id,name,serial,updateDate]";

/// SoftLayer DNS Provider
pub struct SoftlayerProvider {
    pub(crate) client: Client,
    pub(crate) username: String,
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
}

impl SoftlayerProvider {
    pub fn new(username: String, api_key: String, endpoint_url: Option<String>) -> Self {
        let endpoint = endpoint_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| SL_API_BASE.to_string());
        Self {
            client: create_http_client(),
            username,
            api_key,
            endpoint,
        }
    }
}
