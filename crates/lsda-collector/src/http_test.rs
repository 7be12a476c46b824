use std::path::PathBuf;

use super::*;

fn base(url: &str) -> Url {
    HttpSocialClient::with_base_url(url, 5, "lsda-test/0.1")
        .unwrap()
        .base_url()
        .clone()
}

fn app_config(social_api_url: Option<&str>) -> AppConfig {
    AppConfig {
        log_level: "debug".to_owned(),
        output_dir: PathBuf::from("."),
        social_api_url: social_api_url.map(str::to_owned),
        request_timeout_secs: 5,
        user_agent: "lsda-test/0.1".to_owned(),
        llm_base_url: "http://localhost:1".to_owned(),
        llm_api_key: None,
        llm_timeout_secs: 5,
    }
}

#[test]
fn with_base_url_normalises_trailing_slash() {
    assert_eq!(base("https://api.example.com").as_str(), "https://api.example.com/");
    assert_eq!(
        base("https://api.example.com/v1///").as_str(),
        "https://api.example.com/v1/"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = HttpSocialClient::with_base_url("not a url", 5, "lsda-test/0.1");
    assert!(
        matches!(result, Err(SourceError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn new_requires_social_api_url() {
    let result = HttpSocialClient::new(&app_config(None));
    assert!(matches!(result, Err(SourceError::InvalidBaseUrl { .. })));
}

#[test]
fn new_uses_configured_url() {
    let client = HttpSocialClient::new(&app_config(Some("https://profiles.test/api"))).unwrap();
    assert_eq!(client.base_url().as_str(), "https://profiles.test/api/");
}

#[test]
fn endpoint_appends_segments_below_base_path() {
    let url = endpoint(&base("https://api.example.com/v1"), &["users", "acct", "posts"], &[])
        .unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/v1/users/acct/posts");
}

#[test]
fn endpoint_percent_encodes_segments() {
    let url = endpoint(&base("https://api.example.com"), &["users", "a b?c"], &[]).unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/users/a%20b%3Fc");
}

#[test]
fn endpoint_encodes_query_pairs() {
    let url = endpoint(
        &base("https://api.example.com"),
        &["search", "profiles"],
        &[("query", "street photo&co")],
    )
    .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/search/profiles?query=street+photo%26co"
    );
}
