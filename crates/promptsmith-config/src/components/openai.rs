//! Chat-completion provider configuration

use super::defaults::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible provider settings
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenAIConfig {
    /// API key. Usually supplied through `OPENAI_API_KEY` rather than the file.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum output tokens for an optimization request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature (0.0-2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// API base URL (defaults to the public OpenAI endpoint)
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds. Unset means the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            endpoint: None,
            timeout_secs: None,
        }
    }
}

impl OpenAIConfig {
    /// Whether a non-empty API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Get the API base URL, using the public endpoint if not specified
    pub fn base_url(&self) -> String {
        self.endpoint
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}

// The key never reaches logs.
impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenAIConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 1000);
        assert!((config.temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.base_url(), "https://api.openai.com/v1");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_api_key_is_not_a_key() {
        let config = OpenAIConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = OpenAIConfig {
            endpoint: Some("http://localhost:8000/v1/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8000/v1");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = OpenAIConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let config = OpenAIConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("sk-secret"));
    }
}
