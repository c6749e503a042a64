use deno_registry_core::{
    constants::{API_BASE_URL, CDN_BASE_URL, DEFAULT_ACCEPT, DEFAULT_USER_AGENT},
    ErrorBuilder, Result,
};
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use url::Url;

/// Header overrides applied to every request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Defaults to [`DEFAULT_USER_AGENT`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Defaults to `application/json`. Raw source downloads always send `*/*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
}

impl HeaderConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn effective_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn effective_accept(&self) -> &str {
        self.accept.as_deref().unwrap_or(DEFAULT_ACCEPT)
    }
}

/// Base URLs of the two registry hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Host serving enveloped JSON (`/stats`, `/modules`, `/builds`)
    pub api_base: String,
    /// Host serving per-version files and metadata
    pub cdn_base: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE_URL.to_string(),
            cdn_base: CDN_BASE_URL.to_string(),
        }
    }
}

impl HostConfig {
    pub fn new(api_base: impl Into<String>, cdn_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            cdn_base: cdn_base.into(),
        }
    }
}

/// Complete configuration for [`RegistryClient`](crate::RegistryClient).
///
/// Fixed once the client is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Whole-request timeout in milliseconds. None waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    pub headers: HeaderConfig,
    pub hosts: HostConfig,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(mut self, headers: HeaderConfig) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_hosts(mut self, hosts: HostConfig) -> Self {
        self.hosts = hosts;
        self
    }

    /// Set the request timeout. Sub-millisecond remainders round up, so any
    /// non-zero duration stays non-zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ErrorBuilder::config().toml(e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ErrorBuilder::internal(e.to_string()))
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ErrorBuilder::config().file_not_found(path)
            } else {
                e.into()
            }
        })?;
        Self::from_toml(&content)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let user_agent = self.headers.effective_user_agent();
        if user_agent.trim().is_empty() {
            return Err(ErrorBuilder::config().invalid_field("headers.user_agent", "cannot be empty"));
        }
        if HeaderValue::from_str(user_agent).is_err() {
            return Err(ErrorBuilder::config().invalid_header("User-Agent", user_agent));
        }

        let accept = self.headers.effective_accept();
        if HeaderValue::from_str(accept).is_err() {
            return Err(ErrorBuilder::config().invalid_header("Accept", accept));
        }

        validate_host("hosts.api_base", &self.hosts.api_base)?;
        validate_host("hosts.cdn_base", &self.hosts.cdn_base)?;

        if self.timeout_ms == Some(0) {
            return Err(ErrorBuilder::config().invalid_field("timeout_ms", "must be greater than 0"));
        }

        Ok(())
    }
}

fn validate_host(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| ErrorBuilder::config().invalid_field(field, format!("{value}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ErrorBuilder::config().invalid_field(
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ErrorBuilder::config().invalid_field(field, "must not carry a query or fragment"));
    }

    Ok(())
}
