//! Prompt optimization request/response contract
//!
//! [`Optimizer::generate`] never fails at the interface: empty input, a
//! missing credential and provider errors all become [`Optimization`]
//! variants whose `Display` is the text shown to the user.

use crate::prompts::PromptSource;
use crate::traits::{ChatCompletionRequest, ChatMessage, ChatProvider};
use promptsmith_config::{AppConfig, OPENAI_API_KEY_ENV};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Message shown for blank submissions
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a message";

/// User message sent by the credential probe
const PROBE_MESSAGE: &str = "Hi";

/// Outcome of one optimization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optimization {
    /// The `markdown` field of a JSON object reply
    Markdown(String),
    /// Trimmed reply that was not JSON or had no `markdown` field
    RawText(String),
    /// Submission had no non-whitespace characters
    EmptyInput,
    /// No API key is configured
    MissingCredential,
    /// The provider call failed; carries the error text
    ProviderFailure(String),
}

impl Optimization {
    /// True when the model produced output
    pub fn is_success(&self) -> bool {
        matches!(self, Optimization::Markdown(_) | Optimization::RawText(_))
    }

    /// Short machine-friendly variant name
    pub fn kind(&self) -> &'static str {
        match self {
            Optimization::Markdown(_) => "markdown",
            Optimization::RawText(_) => "raw_text",
            Optimization::EmptyInput => "empty_input",
            Optimization::MissingCredential => "missing_credential",
            Optimization::ProviderFailure(_) => "provider_failure",
        }
    }
}

impl fmt::Display for Optimization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optimization::Markdown(text) | Optimization::RawText(text) => f.write_str(text),
            Optimization::EmptyInput => f.write_str(EMPTY_INPUT_MESSAGE),
            Optimization::MissingCredential => write!(
                f,
                "❌ **OpenAI API Key Missing**\n\
                 To use this tool, you need to set your OpenAI API key as an environment variable.\n\
                 **How to set it:**\n\
                 1. Get your API key from https://platform.openai.com/api-keys\n\
                 2. Set the environment variable:\n   \
                    - Linux/Mac: `export {env}='your-key-here'`\n   \
                    - Windows: `set {env}=your-key-here`\n\
                 3. Restart this application\n\
                 **Alternative:** You can also create a `.env` file with:\n\
                 ```\n\
                 {env}=your-key-here\n\
                 ```",
                env = OPENAI_API_KEY_ENV
            ),
            Optimization::ProviderFailure(error) => write!(
                f,
                "❌ **Error occurred:**\n\
                 {error}\n\
                 **Common solutions:**\n\
                 1. Check your internet connection\n\
                 2. Verify your OpenAI API key is valid\n\
                 3. Ensure you have sufficient API credits\n\
                 4. Try again in a few moments"
            ),
        }
    }
}

/// Outcome of the credential liveness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// The provider answered without error
    Valid,
    /// No API key is configured
    Missing,
    /// The provider call failed; carries the error text
    Failed(String),
}

impl CredentialStatus {
    /// True only for [`CredentialStatus::Valid`]
    pub fn is_ok(&self) -> bool {
        matches!(self, CredentialStatus::Valid)
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialStatus::Valid => f.write_str("✅ API key is working!"),
            CredentialStatus::Missing => write!(f, "❌ {} not set", OPENAI_API_KEY_ENV),
            CredentialStatus::Failed(error) => write!(f, "❌ API Error: {error}"),
        }
    }
}

/// Interpret a model reply.
///
/// A JSON object with a `markdown` key yields that value; anything else
/// (plain text, other JSON, missing key) is returned trimmed and unmodified.
pub fn extract_markdown(reply: &str) -> Optimization {
    let trimmed = reply.trim();
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(mut map)) => match map.remove("markdown") {
            Some(serde_json::Value::String(markdown)) => Optimization::Markdown(markdown),
            Some(other) => Optimization::Markdown(other.to_string()),
            None => Optimization::RawText(trimmed.to_string()),
        },
        _ => Optimization::RawText(trimmed.to_string()),
    }
}

/// Sends optimization requests and probes the credential
///
/// Holds read-only configuration and, when an API key was resolved, the
/// provider. Calls share no mutable state and can run concurrently.
pub struct Optimizer {
    config: Arc<AppConfig>,
    prompts: PromptSource,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl Optimizer {
    /// Build an optimizer; `provider` is `None` when no API key is configured
    pub fn new(config: Arc<AppConfig>, provider: Option<Arc<dyn ChatProvider>>) -> Self {
        let prompts = PromptSource::from_config(&config.prompt);
        Self {
            config,
            prompts,
            provider,
        }
    }

    /// Configuration this optimizer was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// System prompt source
    pub fn prompt_source(&self) -> &PromptSource {
        &self.prompts
    }

    /// Turn casual user text into a structured prompt
    pub async fn generate(&self, user_text: &str) -> Optimization {
        if user_text.trim().is_empty() {
            return Optimization::EmptyInput;
        }

        let Some(provider) = &self.provider else {
            return Optimization::MissingCredential;
        };

        let settings = &self.config.openai;
        let request = ChatCompletionRequest::new(
            settings.model.clone(),
            vec![
                ChatMessage::system(self.prompts.resolve()),
                ChatMessage::user(user_text),
            ],
        )
        .with_max_tokens(settings.max_tokens)
        .with_temperature(settings.temperature);

        debug!(
            "Requesting optimization from {} (model {})",
            provider.provider_name(),
            request.model
        );

        let response = match provider.chat_completion(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Optimization request failed: {}", e);
                return Optimization::ProviderFailure(e.to_string());
            }
        };

        if let Some(usage) = response.usage {
            debug!(
                "Optimization used {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        if response.choices.is_empty() {
            warn!("Provider returned no choices");
            return Optimization::ProviderFailure("No choices in response".to_string());
        }

        match response.first_content() {
            Some(content) => extract_markdown(content),
            None => {
                warn!("Provider returned a choice without content");
                Optimization::ProviderFailure("No content in response".to_string())
            }
        }
    }

    /// Liveness probe: one user message, one output token
    ///
    /// Any non-error response counts as valid; its content is ignored.
    pub async fn check_credential(&self) -> CredentialStatus {
        let Some(provider) = &self.provider else {
            return CredentialStatus::Missing;
        };

        let request = ChatCompletionRequest::new(
            self.config.openai.model.clone(),
            vec![ChatMessage::user(PROBE_MESSAGE)],
        )
        .with_max_tokens(1);

        match provider.chat_completion(request).await {
            Ok(_) => CredentialStatus::Valid,
            Err(e) => {
                warn!("Credential check failed: {}", e);
                CredentialStatus::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::DEFAULT_SYSTEM_PROMPT;
    use crate::test_support::MockChatProvider;
    use crate::traits::{LlmError, MessageRole};
    use promptsmith_config::PromptConfig;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            prompt: PromptConfig {
                file: dir.path().join("prompt.md"),
            },
            ..Default::default()
        })
    }

    fn optimizer_with(dir: &TempDir, provider: &Arc<MockChatProvider>) -> Optimizer {
        let provider: Arc<dyn ChatProvider> = provider.clone();
        Optimizer::new(config_in(dir), Some(provider))
    }

    #[tokio::test]
    async fn test_whitespace_input_skips_provider() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(MockChatProvider::replying("unused"));
        let optimizer = optimizer_with(&dir, &provider);

        for input in ["", " ", "\n\t  \r\n"] {
            let result = optimizer.generate(input).await;
            assert_eq!(result, Optimization::EmptyInput);
            assert_eq!(result.to_string(), "Please enter a message");
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_returns_setup_message() {
        let dir = TempDir::new().unwrap();
        let optimizer = Optimizer::new(config_in(&dir), None);

        let first = optimizer.generate("How do I learn Rust?").await;
        let second = optimizer.generate("anything else").await;

        assert_eq!(first, Optimization::MissingCredential);
        assert_eq!(first.to_string(), second.to_string());
        let text = first.to_string();
        assert!(text.starts_with("❌ **OpenAI API Key Missing**"));
        assert!(text.contains("export OPENAI_API_KEY='your-key-here'"));
        assert!(text.contains("set OPENAI_API_KEY=your-key-here"));
        assert!(text.contains("`.env` file"));
    }

    #[tokio::test]
    async fn test_markdown_field_is_extracted() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(MockChatProvider::replying(r##"{"markdown":"# Title"}"##));
        let optimizer = optimizer_with(&dir, &provider);

        let result = optimizer.generate("title please").await;
        assert_eq!(result, Optimization::Markdown("# Title".to_string()));
        assert_eq!(result.to_string(), "# Title");
    }

    #[tokio::test]
    async fn test_plain_text_reply_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(MockChatProvider::replying("Just text, not JSON"));
        let optimizer = optimizer_with(&dir, &provider);

        let result = optimizer.generate("hello").await;
        assert_eq!(result.to_string(), "Just text, not JSON");
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_json_without_markdown_key_is_raw_text() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(MockChatProvider::replying("  {\"other\":\"x\"}\n"));
        let optimizer = optimizer_with(&dir, &provider);

        let result = optimizer.generate("hello").await;
        assert_eq!(result, Optimization::RawText(r#"{"other":"x"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_provider_error_is_embedded() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(MockChatProvider::failing(LlmError::ApiError {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        }));
        let optimizer = optimizer_with(&dir, &provider);

        let result = optimizer.generate("hello").await;
        let text = result.to_string();
        assert!(matches!(result, Optimization::ProviderFailure(_)));
        assert!(text.contains("You exceeded your current quota"));
        assert!(text.contains("**Common solutions:**"));
    }

    #[tokio::test]
    async fn test_request_carries_system_and_user_messages() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(MockChatProvider::replying("ok"));
        let optimizer = optimizer_with(&dir, &provider);

        optimizer.generate("  keep my spacing ").await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.max_tokens, Some(1000));
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(request.messages[1].content, "  keep my spacing ");
    }

    #[tokio::test]
    async fn test_custom_prompt_file_becomes_system_message() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prompt.md"), "  Custom instruction\n").unwrap();
        let provider = Arc::new(MockChatProvider::replying("ok"));
        let optimizer = optimizer_with(&dir, &provider);

        optimizer.generate("hello").await;

        assert_eq!(
            provider.requests()[0].messages[0].content,
            "Custom instruction"
        );
    }

    #[tokio::test]
    async fn test_check_credential_states() {
        let dir = TempDir::new().unwrap();

        let missing = Optimizer::new(config_in(&dir), None);
        assert_eq!(missing.check_credential().await, CredentialStatus::Missing);
        assert_eq!(
            CredentialStatus::Missing.to_string(),
            "❌ OPENAI_API_KEY not set"
        );

        let ok_provider = Arc::new(MockChatProvider::replying(""));
        let valid = optimizer_with(&dir, &ok_provider);
        assert_eq!(valid.check_credential().await, CredentialStatus::Valid);
        assert_eq!(CredentialStatus::Valid.to_string(), "✅ API key is working!");

        let probe = &ok_provider.requests()[0];
        assert_eq!(probe.max_tokens, Some(1));
        assert_eq!(probe.messages, vec![ChatMessage::user("Hi")]);

        let bad_provider = Arc::new(MockChatProvider::failing(LlmError::HttpError(
            "connection refused".to_string(),
        )));
        let failed = optimizer_with(&dir, &bad_provider);
        let status = failed.check_credential().await;
        assert!(!status.is_ok());
        assert_eq!(
            status.to_string(),
            "❌ API Error: HTTP error: connection refused"
        );
    }

    #[tokio::test]
    async fn test_check_credential_ignores_reply_content() {
        let dir = TempDir::new().unwrap();

        for provider in [
            MockChatProvider::without_choices(),
            MockChatProvider::without_content(),
        ] {
            let optimizer = optimizer_with(&dir, &Arc::new(provider));
            assert_eq!(optimizer.check_credential().await, CredentialStatus::Valid);
        }
    }

    #[test]
    fn test_extract_markdown_non_string_value() {
        assert_eq!(
            extract_markdown(r#"{"markdown": 42}"#),
            Optimization::Markdown("42".to_string())
        );
    }

    #[test]
    fn test_extract_markdown_json_array_is_raw() {
        assert_eq!(
            extract_markdown(r#"["markdown"]"#),
            Optimization::RawText(r#"["markdown"]"#.to_string())
        );
    }
}
