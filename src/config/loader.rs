use std::path::Path;
use tracing::{debug, warn};

use super::{
    provider_config_path, ConfigError, ProviderConfig, ENV_HOSTNAME, ENV_SSL_SKIP_VERIFY,
    ENV_TOKEN,
};

/// Load the provider configuration from `~/.workspace-tags/config.toml`.
///
/// Returns `Ok(ProviderConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_provider_config() -> Result<ProviderConfig, ConfigError> {
    let Some(path) = provider_config_path() else {
        warn!("Could not determine home directory; using default provider config");
        return Ok(ProviderConfig::default());
    };

    if !path.exists() {
        debug!("Provider config not found at {}; using defaults", path.display());
        return Ok(ProviderConfig::default());
    }

    load_provider_config_from(&path)
}

/// Load the provider configuration from an explicit path.
///
/// Unlike [`load_provider_config`], a missing file is an error here: the
/// caller asked for this file specifically.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load_provider_config_from(path: &Path) -> Result<ProviderConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: ProviderConfig = toml::from_str(&content)?;
    debug!("Loaded provider config from {}", path.display());
    Ok(config)
}

/// Overlay `TFE_HOSTNAME`, `TFE_TOKEN` and `TFE_SSL_SKIP_VERIFY` onto `config`.
///
/// `lookup` resolves a variable name to its value; pass
/// `|key| std::env::var(key).ok()` for the process environment.
pub fn apply_env_overrides<F>(config: &mut ProviderConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(hostname) = lookup(ENV_HOSTNAME).filter(|v| !v.trim().is_empty()) {
        debug!("Using hostname from {ENV_HOSTNAME}");
        config.hostname = hostname;
    }

    if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
        config.token = Some(token);
    }

    if let Some(raw) = lookup(ENV_SSL_SKIP_VERIFY) {
        match parse_bool(&raw) {
            Some(value) => config.ssl_skip_verify = value,
            None => warn!("Ignoring {ENV_SSL_SKIP_VERIFY}={raw:?}: expected a boolean"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
