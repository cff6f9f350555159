use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with the upstream endpoint and both credentials set.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("SUPPLIER_URL", "https://supplier.example.com/api/stock");
    m.insert("SUPPLIER_KEY", "key-123");
    m.insert("SUPPLIER_TOKEN", "token-456");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STOCKPROXY_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("empty env is valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.supplier_url.is_none());
    assert!(cfg.supplier_key.is_none());
    assert!(cfg.supplier_token.is_none());
    assert_eq!(cfg.fetch_timeout_ms, 15_000);
    assert_eq!(cfg.cors_origin, "*");
    assert_eq!(cfg.user_agent, "stockproxy/0.1 (stock-lookup)");
}

#[test]
fn build_app_config_reads_supplier_settings() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.supplier_url.as_deref(),
        Some("https://supplier.example.com/api/stock")
    );
    assert_eq!(cfg.supplier_key.as_deref(), Some("key-123"));
    assert_eq!(cfg.supplier_token.as_deref(), Some("token-456"));
}

#[test]
fn build_app_config_treats_blank_values_as_unset() {
    let mut map = full_env();
    map.insert("SUPPLIER_KEY", "   ");
    map.insert("SUPPLIER_URL", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.supplier_key.is_none());
    assert!(cfg.supplier_url.is_none());
}

#[test]
fn build_app_config_rejects_non_http_supplier_url() {
    let mut map = full_env();
    map.insert("SUPPLIER_URL", "ftp://supplier.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIER_URL"),
        "expected InvalidEnvVar(SUPPLIER_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fetch_timeout_override() {
    let mut map = full_env();
    map.insert("FETCH_TIMEOUT_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_timeout_ms, 2500);
    assert_eq!(cfg.fetch_timeout(), std::time::Duration::from_millis(2500));
}

#[test]
fn build_app_config_fetch_timeout_invalid() {
    let mut map = full_env();
    map.insert("FETCH_TIMEOUT_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FETCH_TIMEOUT_MS"),
        "expected InvalidEnvVar(FETCH_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fetch_timeout_zero_rejected() {
    let mut map = full_env();
    map.insert("FETCH_TIMEOUT_MS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FETCH_TIMEOUT_MS"
    ));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("STOCKPROXY_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOCKPROXY_BIND_ADDR"),
        "expected InvalidEnvVar(STOCKPROXY_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_cors_origin_override() {
    let mut map = full_env();
    map.insert("CORS_ORIGIN", "https://shop.example.com");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.cors_origin, "https://shop.example.com");
}

#[test]
fn debug_output_redacts_credentials() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("key-123"));
    assert!(!rendered.contains("token-456"));
    assert!(rendered.contains("[redacted]"));
}
