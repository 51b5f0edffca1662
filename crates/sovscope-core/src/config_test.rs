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

/// Env map with the remote strategy switched on and a key present.
fn remote_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("SOV_SENTIMENT_STRATEGY", "remote");
    m.insert("SOV_LLM_API_KEY", "sk-test");
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
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SOV_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.brands_path.to_str(), Some("./config/brands.yaml"));
    assert_eq!(cfg.sentiment_mode, SentimentMode::Local);
    assert!(cfg.llm.is_none());
    assert_eq!(cfg.scoring_concurrency, 4);
}

#[test]
fn build_app_config_remote_without_api_key_leaves_llm_unset() {
    let mut map = HashMap::new();
    map.insert("SOV_SENTIMENT_STRATEGY", "remote");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sentiment_mode, SentimentMode::Remote);
    assert!(cfg.llm.is_none());
}

#[test]
fn build_app_config_treats_blank_api_key_as_unset() {
    let mut map = remote_env();
    map.insert("SOV_LLM_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.llm.is_none());
}

#[test]
fn build_app_config_remote_defaults() {
    let map = remote_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sentiment_mode, SentimentMode::Remote);
    let llm = cfg.llm.expect("remote mode carries llm settings");
    assert_eq!(llm.api_key, "sk-test");
    assert_eq!(llm.base_url, "https://api.openai.com/v1");
    assert_eq!(llm.model, "gpt-4o-mini");
    assert_eq!(llm.timeout_secs, 15);
}

#[test]
fn build_app_config_remote_trims_trailing_slash() {
    let mut map = remote_env();
    map.insert("SOV_LLM_BASE_URL", "http://localhost:8080/v1/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.llm.unwrap().base_url, "http://localhost:8080/v1");
}

#[test]
fn build_app_config_local_keeps_llm_settings_when_key_present() {
    let mut map = HashMap::new();
    map.insert("SOV_LLM_API_KEY", "sk-test");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sentiment_mode, SentimentMode::Local);
    assert_eq!(cfg.llm.map(|l| l.api_key).as_deref(), Some("sk-test"));
}

#[test]
fn build_app_config_rejects_unknown_strategy() {
    let mut map = HashMap::new();
    map.insert("SOV_SENTIMENT_STRATEGY", "vibes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOV_SENTIMENT_STRATEGY"),
        "expected InvalidEnvVar(SOV_SENTIMENT_STRATEGY), got: {result:?}"
    );
}

#[test]
fn strategy_parse_is_case_insensitive() {
    let mut map = remote_env();
    map.insert("SOV_SENTIMENT_STRATEGY", "Remote");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sentiment_mode, SentimentMode::Remote);
}

#[test]
fn scoring_concurrency_override() {
    let mut map = HashMap::new();
    map.insert("SOV_SCORING_CONCURRENCY", "16");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scoring_concurrency, 16);
}

#[test]
fn scoring_concurrency_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("SOV_SCORING_CONCURRENCY", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOV_SCORING_CONCURRENCY"),
        "expected InvalidEnvVar(SOV_SCORING_CONCURRENCY), got: {result:?}"
    );
}

#[test]
fn llm_timeout_invalid() {
    let mut map = remote_env();
    map.insert("SOV_LLM_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOV_LLM_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SOV_LLM_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn llm_config_debug_redacts_api_key() {
    let map = remote_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-test"), "api key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
