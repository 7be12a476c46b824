use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by an upstream [`SocialClient`](crate::SocialClient)
/// or [`SocialSession`](crate::SocialSession).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("login rejected with HTTP status {status}")]
    Unauthorized { status: u16 },

    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("rate limited by upstream (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached for {url}: exceeded {max_pages} pages")]
    PaginationLimit { url: String, max_pages: usize },

    #[error("next-page link leaves the API origin: {url}")]
    ForeignPageLink { url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("{0}")]
    Other(String),
}

/// Fatal failures that end a collection run.
///
/// Nested sub-collection failures never appear here; they are carried as
/// [`Outcome::Degraded`](crate::Outcome::Degraded) instead.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("credentials unavailable: {0}")]
    Precondition(#[from] lsda_core::ConfigError),

    #[error("login failed for {username}: {source}")]
    Authentication {
        username: String,
        #[source]
        source: SourceError,
    },

    #[error("invalid input \"{input}\": {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("failed to fetch {context}: {source}")]
    Fetch {
        context: String,
        #[source]
        source: SourceError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
