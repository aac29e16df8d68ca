//! OpenAI chat provider implementation

use async_trait::async_trait;
use promptsmith_config::OpenAIConfig;
use promptsmith_core::traits::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatProvider, LlmError,
    LlmResult, TokenUsage,
};
use serde::Deserialize;
use std::time::Duration;

/// OpenAI chat provider
///
/// Works against any endpoint implementing `POST {base_url}/chat/completions`.
pub struct OpenAIChatProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    default_model: String,
    timeout: Option<Duration>,
}

impl OpenAIChatProvider {
    /// Create a new OpenAI provider
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            default_model: model,
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }

    /// Create a provider from the `[openai]` config section
    pub fn from_config(config: &OpenAIConfig) -> LlmResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::ConfigError("OPENAI_API_KEY not set".to_string()))?;

        Ok(Self::new(
            api_key,
            Some(config.base_url()),
            config.model.clone(),
            config.timeout_secs,
        ))
    }

    /// API root requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatProvider for OpenAIChatProvider {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> LlmResult<ChatCompletionResponse> {
        // Build OpenAI API request
        let mut api_request = serde_json::json!({
            "model": request.model,
            "messages": request.messages.iter().map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "content": m.content,
                })
            }).collect::<Vec<_>>(),
        });

        // Add optional parameters
        if let Some(temp) = request.temperature {
            api_request["temperature"] = serde_json::json!(temp);
        }

        if let Some(max_tokens) = request.max_tokens {
            api_request["max_tokens"] = serde_json::json!(max_tokens);
        }

        // Make request
        let url = format!("{}/chat/completions", self.base_url);
        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&api_request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!("POST {} (model {})", url, request.model);

        let response = builder
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&error_text),
            });
        }

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let choices = openai_response
            .choices
            .into_iter()
            .enumerate()
            .map(|(i, choice)| ChatCompletionChoice {
                index: choice.index.unwrap_or(i as u32),
                content: choice.message.and_then(|m| m.content),
                finish_reason: choice.finish_reason,
            })
            .collect();

        Ok(ChatCompletionResponse {
            id: openai_response.id.unwrap_or_default(),
            model: openai_response.model.unwrap_or(request.model),
            choices,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

/// Pull `error.message` out of an OpenAI error body, else return the body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<OpenAIErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// OpenAI API response types
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    index: Option<u32>,
    message: Option<OpenAIMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorDetail {
    message: String,
}
