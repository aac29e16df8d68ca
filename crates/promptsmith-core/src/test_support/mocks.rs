//! In-memory chat provider
//!
//! Returns a canned reply or error and records every request it receives.
//!
//! ```ignore
//! use promptsmith_core::test_support::MockChatProvider;
//! use promptsmith_core::{ChatCompletionRequest, ChatMessage, ChatProvider};
//!
//! # async fn example() {
//! let provider = MockChatProvider::replying("hello");
//! let request = ChatCompletionRequest::new("mock-llm", vec![ChatMessage::user("hi")]);
//! let response = provider.chat_completion(request).await.unwrap();
//!
//! assert_eq!(response.first_content(), Some("hello"));
//! assert_eq!(provider.call_count(), 1);
//! # }
//! ```

use crate::traits::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatProvider, LlmError,
    LlmResult, TokenUsage,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockReply {
    Content(String),
    Error(LlmError),
    NoChoices,
    NullContent,
}

/// Mock provider for tests
#[derive(Debug, Clone)]
pub struct MockChatProvider {
    model_name: String,
    reply: Arc<Mutex<MockReply>>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockChatProvider {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            model_name: "mock-llm".to_string(),
            reply: Arc::new(Mutex::new(reply)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider answering every request with `content`
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Content(content.into()))
    }

    /// Provider failing every request with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_reply(MockReply::Error(error))
    }

    /// Provider answering with an empty choice list
    pub fn without_choices() -> Self {
        Self::with_reply(MockReply::NoChoices)
    }

    /// Provider answering with one choice whose content is `null`
    pub fn without_content() -> Self {
        Self::with_reply(MockReply::NullContent)
    }

    /// Change the canned reply
    pub fn set_reply(&self, content: impl Into<String>) {
        *self.reply.lock().unwrap() = MockReply::Content(content.into());
    }

    /// Number of requests received
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copies of the requests received, oldest first
    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> LlmResult<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.reply.lock().unwrap().clone();
        let choices = match reply {
            MockReply::Error(e) => return Err(e),
            MockReply::NoChoices => Vec::new(),
            MockReply::NullContent => vec![ChatCompletionChoice {
                index: 0,
                content: None,
                finish_reason: Some("stop".to_string()),
            }],
            MockReply::Content(content) => vec![ChatCompletionChoice {
                index: 0,
                content: Some(content),
                finish_reason: Some("stop".to_string()),
            }],
        };

        Ok(ChatCompletionResponse {
            id: "mock-chat-id".to_string(),
            model: request.model,
            choices,
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn default_model(&self) -> &str {
        &self.model_name
    }
}
