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
fn build_app_config_uses_defaults_for_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("."));
    assert!(cfg.social_api_url.is_none());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "lsda/0.1 (profile-collector)");
    assert_eq!(cfg.llm_base_url, "https://api.openai.com/v1");
    assert!(cfg.llm_api_key.is_none());
    assert_eq!(cfg.llm_timeout_secs, 60);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("LSDA_OUTPUT_DIR", "/var/lib/lsda");
    map.insert("LSDA_SOCIAL_API_URL", "https://profiles.internal/api");
    map.insert("LSDA_REQUEST_TIMEOUT_SECS", "5");
    map.insert("LSDA_LLM_API_KEY", "sk-test");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("/var/lib/lsda"));
    assert_eq!(
        cfg.social_api_url.as_deref(),
        Some("https://profiles.internal/api")
    );
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.llm_api_key.as_deref(), Some("sk-test"));
}

#[test]
fn build_app_config_treats_empty_api_url_as_unset() {
    let mut map = HashMap::new();
    map.insert("LSDA_SOCIAL_API_URL", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.social_api_url.is_none());
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("LSDA_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LSDA_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LSDA_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_llm_timeout() {
    let mut map = HashMap::new();
    map.insert("LSDA_LLM_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LSDA_LLM_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LSDA_LLM_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn debug_redacts_llm_api_key() {
    let mut map = HashMap::new();
    map.insert("LSDA_LLM_API_KEY", "sk-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn credentials_from_lookup_reads_both_vars() {
    let mut map = HashMap::new();
    map.insert("INSTAGRAM_USERNAME", "reader");
    map.insert("INSTAGRAM_PASSWORD", "hunter2");
    let creds = Credentials::from_lookup(lookup_from_map(&map)).unwrap();
    assert_eq!(creds.username, "reader");
    assert_eq!(creds.password, "hunter2");
}

#[test]
fn credentials_from_lookup_fails_without_username() {
    let mut map = HashMap::new();
    map.insert("INSTAGRAM_PASSWORD", "hunter2");
    let result = Credentials::from_lookup(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "INSTAGRAM_USERNAME"),
        "expected MissingEnvVar(INSTAGRAM_USERNAME), got: {result:?}"
    );
}

#[test]
fn credentials_from_lookup_fails_without_password() {
    let mut map = HashMap::new();
    map.insert("INSTAGRAM_USERNAME", "reader");
    let result = Credentials::from_lookup(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "INSTAGRAM_PASSWORD"),
        "expected MissingEnvVar(INSTAGRAM_PASSWORD), got: {result:?}"
    );
}

#[test]
fn credentials_from_lookup_treats_empty_value_as_missing() {
    let mut map = HashMap::new();
    map.insert("INSTAGRAM_USERNAME", "reader");
    map.insert("INSTAGRAM_PASSWORD", "");
    let result = Credentials::from_lookup(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn credentials_from_lookup_rejects_blank_username() {
    let mut map = HashMap::new();
    map.insert("INSTAGRAM_USERNAME", "   ");
    map.insert("INSTAGRAM_PASSWORD", "hunter2");
    let result = Credentials::from_lookup(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "INSTAGRAM_USERNAME"),
        "expected MissingEnvVar(INSTAGRAM_USERNAME), got: {result:?}"
    );
}
