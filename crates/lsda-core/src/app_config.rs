use std::path::PathBuf;

use crate::ConfigError;

/// Name of the env var holding the social-platform login.
pub const USERNAME_VAR: &str = "INSTAGRAM_USERNAME";
/// Name of the env var holding the social-platform password.
pub const PASSWORD_VAR: &str = "INSTAGRAM_PASSWORD";

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Root under which scrape directories and search result files are written.
    pub output_dir: PathBuf,
    pub social_api_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub llm_base_url: String,
    pub llm_api_key: Option<String>,
    pub llm_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("output_dir", &self.output_dir)
            .field("social_api_url", &self.social_api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("llm_base_url", &self.llm_base_url)
            .field(
                "llm_api_key",
                &self.llm_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .finish()
    }
}

/// Login pair for the upstream social platform.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads the login pair through `lookup`. Unset variables are treated like
    /// empty ones and both go through [`Credentials::ensure_present`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first absent variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let credentials = Self {
            username: lookup(USERNAME_VAR).unwrap_or_default(),
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
        };
        credentials.ensure_present()?;
        Ok(credentials)
    }

    /// Checks a pair before it is used for a login. A username of only
    /// whitespace counts as empty; the password is taken as is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if either half is empty.
    pub fn ensure_present(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar(USERNAME_VAR.to_string()));
        }
        if self.password.is_empty() {
            return Err(ConfigError::MissingEnvVar(PASSWORD_VAR.to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}
