use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which remote API implementation to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// SoftLayer (IBM Cloud classic infrastructure) DNS services.
    Softlayer,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Softlayer => write!(f, "softlayer"),
        }
    }
}

// ============ Zone Types ============

/// A zone (the API calls it a "domain") managed by the remote account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// SOA serial, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// When the zone was last updated, if known.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<chrono::DateTime<chrono::Utc>>,
}

// ============ Resource Record Types ============

/// A resource record as returned by the remote API.
///
/// Record types are kept as free-form upper-case strings: the importer forwards whatever
/// type the zone file names and lets the API accept or reject it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Zone identifier this record belongs to.
    pub domain_id: String,
    /// Host label (e.g., `"www"` or `"@"` for the apex).
    pub host: String,
    /// Record type (e.g., `"A"`, `"MX"`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Record data.
    pub data: String,
    /// MX preference, when the API reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u16>,
}

/// Request to create a new resource record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    /// Zone identifier to create the record in.
    pub domain_id: String,
    /// Host label (e.g., `"www"`).
    pub host: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data.
    pub data: String,
    /// Time to live in seconds. `None` leaves the choice to the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Server-side filter for record listing.
///
/// Every field left as `None` is not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    /// Record type (e.g., `"A"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// Host label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// TTL in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record data (e.g., an IP address).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl RecordFilter {
    /// Filter matching every record with the given host label.
    pub fn by_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Whether no filter field is set.
    pub fn is_empty(&self) -> bool {
        self.record_type.is_none() && self.host.is_none() && self.ttl.is_none() && self.data.is_none()
    }

    /// Client-side check used by providers without server-side filtering
    /// (and by test doubles).
    pub fn matches(&self, record: &DnsRecord) -> bool {
        self.record_type
            .as_deref()
            .is_none_or(|t| t.eq_ignore_ascii_case(&record.record_type))
            && self.host.as_deref().is_none_or(|h| h == record.host)
            && self.ttl.is_none_or(|ttl| ttl == record.ttl)
            && self.data.as_deref().is_none_or(|d| d == record.data)
    }
}

// ============ Credential Types ============

/// Validation error for provider credentials.
///
/// Returned when credential fields are missing or empty.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for the supported remote APIs.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
///
/// # Serialization
///
/// ```json
/// { "provider": "softlayer", "credentials": { "username": "...", "api_key": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// SoftLayer API user credentials.
    #[serde(rename = "softlayer")]
    Softlayer {
        /// API username.
        username: String,
        /// API key.
        api_key: String,
        /// REST endpoint override; the public endpoint is used when `None`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint_url: Option<String>,
    },
}

impl ProviderCredentials {
    /// Returns the provider type for these credentials.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Softlayer { .. } => ProviderType::Softlayer,
        }
    }

    /// Check that every required field carries a non-blank value.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError::EmptyField`] for the first blank field.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        match self {
            Self::Softlayer {
                username, api_key, ..
            } => {
                Self::require_non_empty(username, "username", "Username")?;
                Self::require_non_empty(api_key, "apiKey", "API Key")
            }
        }
    }

    fn require_non_empty(
        value: &str,
        key: &str,
        label: &str,
    ) -> Result<(), CredentialValidationError> {
        if value.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                provider: ProviderType::Softlayer,
                field: key.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(host: &str, record_type: &str, ttl: u32, data: &str) -> DnsRecord {
        DnsRecord {
            id: "1".to_string(),
            domain_id: "10".to_string(),
            host: host.to_string(),
            record_type: record_type.to_string(),
            ttl,
            data: data.to_string(),
            mx_priority: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&record("www", "A", 3600, "10.0.0.1")));
    }

    #[test]
    fn filter_type_is_case_insensitive() {
        let filter = RecordFilter {
            record_type: Some("cname".to_string()),
            ..RecordFilter::default()
        };
        assert!(filter.matches(&record("blog", "CNAME", 3600, "www.example.com.")));
        assert!(!filter.matches(&record("blog", "A", 3600, "10.0.0.1")));
    }

    #[test]
    fn filter_by_host_and_ttl() {
        let filter = RecordFilter {
            ttl: Some(60),
            ..RecordFilter::by_host("www")
        };
        assert!(filter.matches(&record("www", "A", 60, "10.0.0.1")));
        assert!(!filter.matches(&record("www", "A", 3600, "10.0.0.1")));
        assert!(!filter.matches(&record("mail", "A", 60, "10.0.0.1")));
    }

    #[test]
    fn create_request_omits_missing_ttl() {
        let req = CreateRecordRequest {
            domain_id: "10".to_string(),
            host: "@".to_string(),
            record_type: "A".to_string(),
            data: "10.0.0.1".to_string(),
            ttl: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "A");
        assert!(json.get("ttl").is_none());
    }

    #[test]
    fn credentials_reject_blank_api_key() {
        let creds = ProviderCredentials::Softlayer {
            username: "user".to_string(),
            api_key: "  ".to_string(),
            endpoint_url: None,
        };
        let err = creds.validate().unwrap_err();
        assert_eq!(err.to_string(), "Field must not be empty: API Key");
    }

    #[test]
    fn credentials_deserialize_tagged() {
        let creds: ProviderCredentials = serde_json::from_str(
            r#"{"provider":"softlayer","credentials":{"username":"u","api_key":"k"}}"#,
        )
        .unwrap();
        assert_eq!(creds.provider_type(), ProviderType::Softlayer);
        assert!(creds.validate().is_ok());
    }
}
