//! Subcommand implementations

pub mod optimize;
pub mod serve;
pub mod status;

use anyhow::{Context, Result};
use promptsmith_config::AppConfig;
use promptsmith_core::Optimizer;
use promptsmith_llm::create_chat_provider;
use std::sync::Arc;

/// Build the optimizer shared by every command
pub fn build_optimizer(config: Arc<AppConfig>) -> Result<Arc<Optimizer>> {
    let provider =
        create_chat_provider(&config.openai).context("Failed to create chat provider")?;
    Ok(Arc::new(Optimizer::new(config, provider)))
}
