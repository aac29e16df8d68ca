use anyhow::Result;
use promptsmith_core::Optimizer;
use promptsmith_web::{start_server, AppState};
use std::sync::Arc;
use tracing::info;

/// Run the web UI until the process is stopped
pub async fn execute(optimizer: Arc<Optimizer>) -> Result<()> {
    info!(
        "Prompt file: {}, model: {}",
        optimizer.prompt_source().path().display(),
        optimizer.config().openai.model
    );

    let server = optimizer.config().server.clone();
    start_server(&server, AppState::new(optimizer)).await?;
    Ok(())
}
