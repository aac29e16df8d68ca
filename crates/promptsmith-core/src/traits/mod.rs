//! Provider abstraction
//!
//! Core defines the chat-completion interface; `promptsmith-llm` implements it
//! over HTTP, and [`crate::test_support`] provides an in-memory mock.

pub mod llm;

pub use llm::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatProvider, LlmError, LlmResult, MessageRole, TokenUsage,
};
