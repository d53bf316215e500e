use url::Url;

use crate::app_config::{AppConfig, FallbackStrategy, ResolverConfig, DEFAULT_APP_NAME};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|value| !value.trim().is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let callback_url = optional("GMLINK_CALLBACK_URL")
        .map(|raw| parse_callback_url(raw.trim()))
        .transpose()
        .map_err(|reason| invalid("GMLINK_CALLBACK_URL", reason))?;

    let fallback_strategy = or_default("GMLINK_FALLBACK", "none")
        .parse::<FallbackStrategy>()
        .map_err(|e| invalid("GMLINK_FALLBACK", e.to_string()))?;

    let app_name = optional("GMLINK_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
    let log_level = or_default("GMLINK_LOG_LEVEL", "info");

    Ok(AppConfig {
        resolver: ResolverConfig {
            callback_url,
            fallback_strategy,
            app_name,
        },
        log_level,
    })
}

/// Parse a callback URL. It must be absolute: the target app calls it from
/// outside the host application.
///
/// # Errors
///
/// Returns a human-readable reason when the value is not an absolute URL.
pub fn parse_callback_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if url.cannot_be_a_base() && url.path().is_empty() {
        return Err(format!("\"{raw}\" is not an absolute URL"));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
