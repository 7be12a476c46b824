//! OpenAI-compatible `/chat/completions` backend.
//!
//! Works with any endpoint that speaks the Chat Completions schema; the base
//! URL selects the provider.

use std::fmt;
use std::time::Duration;

use lsda_core::AppConfig;
use reqwest::{Client, Url};

use crate::backend::CompletionBackend;
use crate::error::BackendError;
use crate::types::{CompletionRequest, CompletionResponse};

pub struct OpenAiCompatBackend {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl fmt::Debug for OpenAiCompatBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatBackend")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish_non_exhaustive()
    }
}

impl OpenAiCompatBackend {
    /// Creates a backend posting to `{base_url}/chat/completions`.
    ///
    /// Without an `api_key` no `Authorization` header is sent, which suits
    /// local providers.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidBaseUrl`] if `base_url` cannot be parsed,
    /// or [`BackendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let raw = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| BackendError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    /// Creates a backend from the `LSDA_LLM_*` settings.
    ///
    /// # Errors
    ///
    /// See [`OpenAiCompatBackend::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::new(
            &config.llm_base_url,
            config.llm_api_key.clone(),
            config.llm_timeout_secs,
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CompletionBackend for OpenAiCompatBackend {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, BackendError> {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Provider {
                status: status.as_u16(),
                message: provider_message(&body)
                    .unwrap_or_else(|| format!("HTTP {status}: {}", truncate(&body, 200))),
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::Deserialize {
                context: format!("completion response from {}", self.endpoint),
                source: e,
            })?;

        // Some providers report failures in a 200 body.
        if let Some(error) = parsed.extra.get("error").filter(|e| !e.is_null()) {
            return Err(BackendError::Provider {
                status: status.as_u16(),
                message: error["message"]
                    .as_str()
                    .unwrap_or("unknown provider error")
                    .to_owned(),
            });
        }

        tracing::debug!(
            model = parsed.model.as_deref().unwrap_or(&request.model),
            choices = parsed.choices.len(),
            "completion received"
        );
        Ok(parsed)
    }
}

/// Extracts `error.message` from a provider error body.
fn provider_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(str::to_owned)
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
