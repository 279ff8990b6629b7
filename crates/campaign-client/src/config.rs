//! Client configuration.

use crate::error::ConfigError;

/// Environment variable selecting the API base URL.
pub const BASE_URL_ENV: &str = "CAMPAIGN_API_BASE_URL";

/// Base URL used when [`BASE_URL_ENV`] is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL without a trailing slash; request paths are appended.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl ClientConfig {
    /// Validate and normalize a base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.clone(),
                message: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }
        Ok(Self { base_url: trimmed.to_string() })
    }

    /// Read the base URL from [`BASE_URL_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    /// Absolute URL for a request path such as `/campaigns`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
