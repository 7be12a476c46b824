use crate::app_config::{AppConfig, Credentials};
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

/// Load the social-platform login pair from the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] if either credential is absent.
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    Credentials::from_lookup(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("LSDA_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("LSDA_OUTPUT_DIR", "."));
    let social_api_url = lookup("LSDA_SOCIAL_API_URL")
        .ok()
        .filter(|v| !v.is_empty());

    let request_timeout_secs = parse_u64("LSDA_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LSDA_USER_AGENT", "lsda/0.1 (profile-collector)");

    let llm_base_url = or_default("LSDA_LLM_BASE_URL", "https://api.openai.com/v1");
    let llm_api_key = lookup("LSDA_LLM_API_KEY").ok().filter(|v| !v.is_empty());
    let llm_timeout_secs = parse_u64("LSDA_LLM_TIMEOUT_SECS", "60")?;

    Ok(AppConfig {
        log_level,
        output_dir,
        social_api_url,
        request_timeout_secs,
        user_agent,
        llm_base_url,
        llm_api_key,
        llm_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
