use crate::app_config::{AppConfig, Environment};
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
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    // Empty values count as unset, matching how the proxy is usually deployed
    // (blank entries in a hosting dashboard).
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("STOCKPROXY_ENV", "development"))?;

    let bind_addr = or_default("STOCKPROXY_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("STOCKPROXY_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("STOCKPROXY_LOG_LEVEL", "info");

    let supplier_url = optional("SUPPLIER_URL");
    if let Some(url) = &supplier_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid(
                "SUPPLIER_URL",
                format!("\"{url}\" must be an http(s) URL"),
            ));
        }
    }
    let supplier_key = optional("SUPPLIER_KEY");
    let supplier_token = optional("SUPPLIER_TOKEN");

    let fetch_timeout_ms = or_default(
        "FETCH_TIMEOUT_MS",
        &crate::DEFAULT_FETCH_TIMEOUT_MS.to_string(),
    )
    .parse::<u64>()
    .map_err(|e| invalid("FETCH_TIMEOUT_MS", e.to_string()))?;
    if fetch_timeout_ms == 0 {
        return Err(invalid("FETCH_TIMEOUT_MS", "must be greater than 0".into()));
    }

    let cors_origin = or_default("CORS_ORIGIN", "*");
    let user_agent = or_default("STOCKPROXY_USER_AGENT", "stockproxy/0.1 (stock-lookup)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        supplier_url,
        supplier_key,
        supplier_token,
        fetch_timeout_ms,
        cors_origin,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOCKPROXY_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
