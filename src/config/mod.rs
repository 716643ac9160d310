//! Provider configuration loaded from `~/.workspace-tags/config.toml`.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values. Environment variables override the file, and the CLI
//! overrides both. The result is validated once here, before any value
//! reaches the reconcilers.

mod loader;

pub use loader::{apply_env_overrides, load_provider_config, load_provider_config_from};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Hostname used when none is configured.
pub const DEFAULT_HOSTNAME: &str = "app.terraform.io";

/// Largest page size the remote accepts for tag listings.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const ENV_HOSTNAME: &str = "TFE_HOSTNAME";
pub const ENV_TOKEN: &str = "TFE_TOKEN";
pub const ENV_SSL_SKIP_VERIFY: &str = "TFE_SSL_SKIP_VERIFY";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("No API token configured. Set TFE_TOKEN, pass --token, or add `token` to the config file")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Connection settings for the remote workspace/tag API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// API hostname, optionally with a scheme (`http://localhost:3000`)
    pub hostname: String,
    /// Bearer token for the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Accept invalid TLS certificates (self-hosted installs only)
    pub ssl_skip_verify: bool,
    /// Tags requested per listing page
    pub page_size: u32,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            token: None,
            ssl_skip_verify: false,
            page_size: MAX_PAGE_SIZE,
            request_timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    /// Check the values the HTTP client depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty hostname, a page size
    /// outside `1..=100`, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigError::Invalid("hostname cannot be empty".to_string()));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::Invalid(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured token, if any non-blank one is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when no token is available.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)
    }
}

/// Resolve the default config file path (`~/.workspace-tags/config.toml`).
#[must_use]
pub fn provider_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".workspace-tags").join("config.toml"))
}
