//! Shared configuration for the `lsda` workspace.
//!
//! Every run entry point receives its settings as explicit structs built here,
//! so no crate reads the process environment on its own.

pub mod app_config;
pub mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Credentials};
pub use config::{load_app_config, load_app_config_from_env, load_credentials};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
