//! Chat provider implementations

pub mod openai;

pub use openai::OpenAIChatProvider;

use promptsmith_config::OpenAIConfig;
use promptsmith_core::traits::{ChatProvider, LlmResult};
use std::sync::Arc;

/// Create a chat provider from configuration
///
/// Returns `Ok(None)` when no API key is configured; the optimizer then
/// answers with setup instructions instead of calling out.
pub fn create_chat_provider(config: &OpenAIConfig) -> LlmResult<Option<Arc<dyn ChatProvider>>> {
    if !config.has_api_key() {
        tracing::info!("No API key configured; optimizer will return setup instructions");
        return Ok(None);
    }

    let provider = OpenAIChatProvider::from_config(config)?;
    Ok(Some(Arc::new(provider)))
}
