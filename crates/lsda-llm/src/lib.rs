//! Text completion against a pluggable large-language-model backend.
//!
//! [`llm_completion`] is the single entry point: it sends one ordered list of
//! role/content messages to a [`CompletionBackend`] and returns the backend's
//! response. Any backend failure is re-wrapped as
//! [`CompletionError::Backend`]; nothing is retried.

pub mod backend;
pub mod completion;
pub mod error;
pub mod openai;
pub mod types;

pub use backend::CompletionBackend;
pub use completion::llm_completion;
pub use error::{BackendError, CompletionError};
pub use openai::OpenAiCompatBackend;
pub use types::{
    ChatMessage, Choice, CompletionOptions, CompletionRequest, CompletionResponse, ResponseMessage,
    Usage,
};
