//! Configuration components
//!
//! One small struct per concern, composed into [`AppConfig`].

pub mod defaults;
pub mod openai;
pub mod prompt;
pub mod server;
pub mod ui;

pub use openai::*;
pub use prompt::*;
pub use server::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Chat-completion provider settings
    #[serde(default)]
    pub openai: OpenAIConfig,
    /// System prompt override file
    #[serde(default)]
    pub prompt: PromptConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Page title and description
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(format!(
                "openai.temperature must be between 0.0 and 2.0, got {}",
                self.openai.temperature
            ));
        }
        if self.openai.max_tokens == 0 {
            return Err("openai.max_tokens must be greater than zero".to_string());
        }
        if self.openai.model.trim().is_empty() {
            return Err("openai.model must not be empty".to_string());
        }
        Ok(())
    }
}
