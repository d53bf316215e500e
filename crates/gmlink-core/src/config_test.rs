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

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert!(cfg.resolver.callback_url.is_none());
    assert_eq!(cfg.resolver.fallback_strategy, FallbackStrategy::None);
    assert_eq!(cfg.resolver.app_name, "gmlink");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_all_vars() {
    let mut map = HashMap::new();
    map.insert("GMLINK_CALLBACK_URL", "sampleapp://maps-done");
    map.insert("GMLINK_FALLBACK", "chrome-then-apple-maps");
    map.insert("GMLINK_APP_NAME", "Sample App");
    map.insert("GMLINK_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.resolver.callback_url.as_ref().map(url::Url::as_str),
        Some("sampleapp://maps-done")
    );
    assert_eq!(
        cfg.resolver.fallback_strategy,
        FallbackStrategy::ChromeThenAppleMaps
    );
    assert_eq!(cfg.resolver.app_name, "Sample App");
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_fails_with_invalid_callback_url() {
    let mut map = HashMap::new();
    map.insert("GMLINK_CALLBACK_URL", "not a url");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GMLINK_CALLBACK_URL"),
        "expected InvalidEnvVar(GMLINK_CALLBACK_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_ignores_blank_callback_url() {
    let mut map = HashMap::new();
    map.insert("GMLINK_CALLBACK_URL", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.resolver.callback_url.is_none());
}

#[test]
fn build_app_config_fails_with_unknown_fallback() {
    let mut map = HashMap::new();
    map.insert("GMLINK_FALLBACK", "netscape");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GMLINK_FALLBACK"),
        "expected InvalidEnvVar(GMLINK_FALLBACK), got: {result:?}"
    );
}

#[test]
fn build_app_config_blank_app_name_uses_default() {
    let mut map = HashMap::new();
    map.insert("GMLINK_APP_NAME", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.resolver.app_name, DEFAULT_APP_NAME);
}

#[test]
fn parse_callback_url_rejects_bare_scheme() {
    assert!(parse_callback_url("sampleapp:").is_err());
}

#[test]
fn parse_callback_url_accepts_custom_scheme() {
    let url = parse_callback_url("sampleapp://callback?from=maps").unwrap();
    assert_eq!(url.scheme(), "sampleapp");
}
