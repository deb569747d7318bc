//! CLI configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

use sagapay_client::config::{ENV_API_KEY, ENV_API_SECRET, ENV_BASE_URL};
use sagapay_client::{ApiClient, ClientConfig};
use sagapay_crypto::SecretKey;
use sagapay_types::constants::DEFAULT_BASE_URL;
use sagapay_webhook::WebhookVerifier;

use crate::error::{CliError, CliResult};

/// Overrides the directory holding `config.toml`.
pub const ENV_CONFIG_DIR: &str = "SAGAPAY_CONFIG_DIR";

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    })
}

/// Expand `${VAR_NAME}` references using `lookup`.
///
/// Unknown variables are left as-is.
fn expand_vars<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_var_pattern()
        .replace_all(input, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Gateway credentials and endpoint.
    pub gateway: GatewayConfig,
    /// Defaults for command arguments.
    pub defaults: DefaultsConfig,
}

/// Gateway section.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Defaults section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// IPN URL used when `--ipn-url` is not given.
    pub ipn_url: Option<String>,
}

impl CliConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields defaults. `${VAR}` references in the gateway
    /// section are expanded, then empty credentials are filled from
    /// `SAGAPAY_API_KEY` / `SAGAPAY_API_SECRET`.
    pub fn load(path: &Path) -> CliResult<Self> {
        let exists = path.exists();
        debug!(path = %path.display(), exists, "Loading config");
        let mut config: Self = if exists {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.resolve(env_lookup);
        debug!(
            base_url = %config.gateway.base_url,
            has_api_key = !config.gateway.api_key.is_empty(),
            has_api_secret = !config.gateway.api_secret.is_empty(),
            "Config resolved"
        );
        Ok(config)
    }

    /// Expand variables and apply environment fallbacks.
    fn resolve<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = &mut self.gateway;
        gateway.api_key = expand_vars(&gateway.api_key, &lookup);
        gateway.api_secret = expand_vars(&gateway.api_secret, &lookup);
        gateway.base_url = expand_vars(&gateway.base_url, &lookup);

        if gateway.api_key.is_empty() {
            gateway.api_key = lookup(ENV_API_KEY).unwrap_or_default();
        }
        if gateway.api_secret.is_empty() {
            gateway.api_secret = lookup(ENV_API_SECRET).unwrap_or_default();
        }
        if gateway.base_url.is_empty() || gateway.base_url == DEFAULT_BASE_URL {
            if let Some(url) = lookup(ENV_BASE_URL).filter(|url| !url.is_empty()) {
                gateway.base_url = url;
            }
        }
        if gateway.base_url.is_empty() {
            gateway.base_url = DEFAULT_BASE_URL.to_string();
        }
    }

    /// Client configuration for the gateway section.
    pub fn client_config(&self) -> CliResult<ClientConfig> {
        if self.gateway.api_key.is_empty() {
            return Err(CliError::config(format!(
                "API key not set. Add gateway.api_key to the config file or set {}.",
                ENV_API_KEY
            )));
        }
        Ok(ClientConfig::new(self.gateway.api_key.as_str(), self.secret()?)
            .with_base_url(&self.gateway.base_url))
    }

    /// Build an API client.
    pub fn client(&self) -> CliResult<ApiClient> {
        Ok(ApiClient::new(self.client_config()?)?)
    }

    /// The API secret. Signing and webhook verification need nothing else.
    pub fn secret(&self) -> CliResult<SecretKey> {
        if self.gateway.api_secret.is_empty() {
            return Err(CliError::config(format!(
                "API secret not set. Add gateway.api_secret to the config file or set {}.",
                ENV_API_SECRET
            )));
        }
        Ok(SecretKey::from(self.gateway.api_secret.as_str()))
    }

    /// Build a webhook verifier keyed by the API secret.
    pub fn webhook_verifier(&self) -> CliResult<WebhookVerifier> {
        Ok(WebhookVerifier::new(self.secret()?))
    }

    /// Pick the IPN URL from the command line or the config defaults.
    pub fn resolve_ipn_url(&self, arg: Option<String>) -> CliResult<String> {
        arg.or_else(|| self.defaults.ipn_url.clone())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                CliError::user("--ipn-url is required (or set defaults.ipn_url in the config file)")
            })
    }
}

/// Get the directory holding the CLI configuration.
pub fn default_base_dir() -> PathBuf {
    // Check environment variable first
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return PathBuf::from(dir);
    }

    // Use platform-specific config directory
    directories::ProjectDirs::from("net", "sagapay", "sagapay")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            // Fallback to home directory
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".sagapay")
        })
}

/// Get the default configuration file path.
pub fn default_config_path() -> PathBuf {
    default_base_dir().join("config.toml")
}
