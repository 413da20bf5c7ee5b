//! Configuration loading
//!
//! Credentials come from a JSON file, then from the environment:
//!
//! ```json
//! { "username": "SL123456", "api_key": "...", "endpoint_url": "https://api.softlayer.com/rest/v3.1" }
//! ```
//!
//! `SL_USERNAME`, `SL_API_KEY` and `SL_ENDPOINT_URL` override the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dnsctl_provider::{CredentialValidationError, ProviderCredentials, ProviderType};
use serde::{Deserialize, Serialize};

/// Largest configuration file accepted.
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl CliConfig {
    /// `<config dir>/dnsctl/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dnsctl").join("config.json"))
    }

    /// Load the file at `path`, or the default file when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file yields an empty config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let metadata = std::fs::metadata(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            anyhow::bail!(
                "Config file too large: {} bytes (max: {MAX_CONFIG_FILE_SIZE} bytes)",
                metadata.len()
            );
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `SL_*` overrides from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `SL_*` overrides from `lookup`. Empty values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(username) = get("SL_USERNAME") {
            self.username = Some(username);
        }
        if let Some(api_key) = get("SL_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(endpoint_url) = get("SL_ENDPOINT_URL") {
            self.endpoint_url = Some(endpoint_url);
        }
        self
    }

    /// Credentials for the API client.
    pub fn credentials(&self) -> std::result::Result<ProviderCredentials, CredentialValidationError> {
        let username = Self::require(self.username.as_ref(), "username", "Username")?;
        let api_key = Self::require(self.api_key.as_ref(), "api_key", "API Key")?;
        let credentials = ProviderCredentials::Softlayer {
            username,
            api_key,
            endpoint_url: self.endpoint_url.clone(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    fn require(
        value: Option<&String>,
        field: &str,
        label: &str,
    ) -> std::result::Result<String, CredentialValidationError> {
        value.cloned().ok_or_else(|| CredentialValidationError::MissingField {
            provider: ProviderType::Softlayer,
            field: field.to_string(),
            label: label.to_string(),
        })
    }
}
