//! `complete` command handler.

use anyhow::Context;
use lsda_core::AppConfig;
use lsda_llm::{llm_completion, ChatMessage, CompletionOptions, OpenAiCompatBackend};

/// Prompt and sampling settings taken from the command line.
#[derive(Debug)]
pub(crate) struct PromptArgs {
    pub model: String,
    pub system: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub prompt: String,
}

impl PromptArgs {
    pub(crate) fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.push(ChatMessage::user(self.prompt.clone()));
        messages
    }

    pub(crate) fn options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            ..CompletionOptions::default()
        }
    }
}

/// Sends one prompt to the configured backend and prints the reply.
///
/// # Errors
///
/// Returns an error if the backend cannot be built or the completion fails.
pub(crate) async fn run_complete(
    config: &AppConfig,
    args: PromptArgs,
    raw: bool,
) -> anyhow::Result<()> {
    let backend =
        OpenAiCompatBackend::from_config(config).context("failed to build completion backend")?;

    let response = llm_completion(&backend, args.messages(), &args.model, args.options()).await?;

    if raw {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response.text() {
        Some(text) => println!("{text}"),
        None => tracing::warn!(model = %args.model, "completion returned no text"),
    }
    Ok(())
}
