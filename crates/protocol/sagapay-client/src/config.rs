//! Client configuration.

use std::fmt;
use std::sync::Arc;

use reqwest::Url;

use sagapay_crypto::SecretKey;
use sagapay_types::constants::DEFAULT_BASE_URL;
use sagapay_types::{SagaPayError, SagaPayResult};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SAGAPAY_API_KEY";

/// Environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "SAGAPAY_API_SECRET";

/// Environment variable overriding the gateway base URL.
pub const ENV_BASE_URL: &str = "SAGAPAY_BASE_URL";

/// Merchant credentials sent with every request.
#[derive(Clone)]
pub struct Credentials {
    /// Public API key.
    pub api_key: String,
    /// API secret. Also keys webhook signatures.
    pub api_secret: Arc<SecretKey>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret)
            .finish()
    }
}

/// Configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Merchant credentials.
    pub credentials: Credentials,
    /// Gateway base URL, without a trailing `/`.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config for the production gateway.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<SecretKey>) -> Self {
        Self {
            credentials: Credentials {
                api_key: api_key.into(),
                api_secret: Arc::new(api_secret.into()),
            },
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another gateway (sandbox, local mock).
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Load from `SAGAPAY_API_KEY`, `SAGAPAY_API_SECRET` and the optional
    /// `SAGAPAY_BASE_URL`.
    pub fn from_env() -> SagaPayResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> SagaPayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| SagaPayError::invalid_param(format!("{} is not set", ENV_API_KEY)))?;
        let api_secret = lookup(ENV_API_SECRET)
            .ok_or_else(|| SagaPayError::invalid_param(format!("{} is not set", ENV_API_SECRET)))?;

        let config = Self::new(api_key, api_secret);
        Ok(match lookup(ENV_BASE_URL).filter(|url| !url.is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }

    /// Check that the config can be used to build a client.
    pub fn validate(&self) -> SagaPayResult<()> {
        if self.credentials.api_key.is_empty() {
            return Err(SagaPayError::invalid_param("API key must not be empty"));
        }
        if self.credentials.api_secret.is_empty() {
            return Err(SagaPayError::invalid_param("API secret must not be empty"));
        }
        if self.credentials.api_secret.as_str().is_none() {
            return Err(SagaPayError::invalid_param("API secret must be valid UTF-8"));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            SagaPayError::invalid_param(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SagaPayError::invalid_param(format!(
                "Base URL scheme must be http or https, got '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagapay_types::ErrorCode;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("key", "secret");
        assert_eq!(config.base_url, "https://api.sagapay.net");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = ClientConfig::new("key", "secret").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
            (ENV_BASE_URL, "https://sandbox.sagapay.net/"),
        ]))
        .unwrap();
        assert_eq!(config.credentials.api_key, "key");
        assert_eq!(config.credentials.api_secret.as_str(), Some("secret"));
        assert_eq!(config.base_url, "https://sandbox.sagapay.net");
    }

    #[test]
    fn test_from_lookup_default_base_url() {
        let config =
            ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "key"), (ENV_API_SECRET, "secret")]))
                .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "key")])).unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidParam);
        assert!(err.message().contains(ENV_API_SECRET));
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        let err = ClientConfig::new("", "secret").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidParam);

        let err = ClientConfig::new("key", "").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorCode::InvalidParam);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = ClientConfig::new("key", "secret").with_base_url("not a url");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("key", "secret").with_base_url("ftp://api.sagapay.net");
        let err = config.validate().unwrap_err();
        assert!(err.message().contains("ftp"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new("key", "super-secret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("key"));
        assert!(!debug.contains("super-secret"));
    }
}
