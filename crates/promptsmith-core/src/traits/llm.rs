//! Chat-completion types and the provider trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for provider calls
pub type LlmResult<T> = Result<T, LlmError>;

/// Provider call failures
///
/// Every variant carries text meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LlmError {
    /// Transport failure (DNS, connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },

    /// The API answered 2xx but the body was unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The provider could not be built from configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instruction that frames the conversation
    System,
    /// End-user text
    User,
    /// Model output
    Assistant,
}

impl MessageRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// System message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// User message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Ordered conversation
    pub messages: Vec<ChatMessage>,
    /// Output token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Request with no limits set
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set the output token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens generated
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// One completion alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    /// Position in the choice list
    pub index: u32,
    /// Generated text; `None` when the provider sent `null`
    pub content: Option<String>,
    /// Why generation stopped, if reported
    pub finish_reason: Option<String>,
}

/// A chat-completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Provider-assigned id
    pub id: String,
    /// Model that answered
    pub model: String,
    /// Completion alternatives; may be empty
    pub choices: Vec<ChatCompletionChoice>,
    /// Token usage, when reported
    pub usage: Option<TokenUsage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if there is one and it is not null
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.content.as_deref())
    }
}

/// A chat-completion backend
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one request and wait for the full response
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> LlmResult<ChatCompletionResponse>;

    /// Human-readable provider name
    fn provider_name(&self) -> &str;

    /// Model used when the caller does not pick one
    fn default_model(&self) -> &str;
}
