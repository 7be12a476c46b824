use crate::backend::CompletionBackend;
use crate::error::CompletionError;
use crate::types::{ChatMessage, CompletionOptions, CompletionRequest, CompletionResponse};

/// Sends `messages` to `model` through `backend` and returns the response.
///
/// Makes exactly one attempt.
///
/// # Errors
///
/// Returns [`CompletionError::Backend`] wrapping whatever the backend raised.
pub async fn llm_completion<B: CompletionBackend>(
    backend: &B,
    messages: Vec<ChatMessage>,
    model: &str,
    options: CompletionOptions,
) -> Result<CompletionResponse, CompletionError> {
    let request = CompletionRequest {
        model: model.to_owned(),
        messages,
        options,
    };
    tracing::debug!(model, messages = request.messages.len(), "requesting completion");

    backend
        .complete(&request)
        .await
        .map_err(|source| CompletionError::Backend {
            model: model.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::error::BackendError;

    /// Records every request and answers from a fixed script.
    struct ScriptedBackend {
        seen: Mutex<Vec<serde_json::Value>>,
        fail: bool,
    }

    impl ScriptedBackend {
        fn new(fail: bool) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl CompletionBackend for ScriptedBackend {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, BackendError> {
            self.seen
                .lock()
                .unwrap()
                .push(serde_json::to_value(request).unwrap());
            if self.fail {
                return Err(BackendError::Provider {
                    status: 503,
                    message: "overloaded".to_owned(),
                });
            }
            Ok(serde_json::from_value(json!({
                "model": request.model,
                "choices": [{"message": {"role": "assistant", "content": "pong"}}]
            }))
            .unwrap())
        }
    }

    #[tokio::test]
    async fn forwards_messages_model_and_options() {
        let backend = ScriptedBackend::new(false);
        let response = llm_completion(
            &backend,
            vec![ChatMessage::user("ping")],
            "local-model",
            CompletionOptions::default().temperature(0.0).extra("seed", 7),
        )
        .await
        .unwrap();

        assert_eq!(response.text(), Some("pong"));
        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            json!({
                "model": "local-model",
                "messages": [{"role": "user", "content": "ping"}],
                "temperature": 0.0,
                "seed": 7
            })
        );
    }

    #[tokio::test]
    async fn backend_failure_is_wrapped_once() {
        let backend = ScriptedBackend::new(true);
        let err = llm_completion(
            &backend,
            vec![ChatMessage::user("ping")],
            "m",
            CompletionOptions::default(),
        )
        .await
        .unwrap_err();

        let CompletionError::Backend { model, source } = &err;
        assert_eq!(model, "m");
        assert!(matches!(source, BackendError::Provider { status: 503, .. }));
        assert!(err.to_string().starts_with("an error occurred during completion"));
        assert_eq!(backend.seen.lock().unwrap().len(), 1);
    }
}
