use crate::error::BackendError;
use crate::types::{CompletionRequest, CompletionResponse};

/// A provider that turns one chat request into one response.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    /// Sends `request` once.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, BackendError>;
}
