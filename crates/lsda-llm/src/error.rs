use thiserror::Error;

/// Failures raised by a [`CompletionBackend`](crate::CompletionBackend).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("an error occurred during completion with {model}: {source}")]
    Backend {
        model: String,
        #[source]
        source: BackendError,
    },
}
