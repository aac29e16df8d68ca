use promptsmith_config::UiConfig;
use promptsmith_core::{Optimizer, ReadinessReporter};
use std::sync::Arc;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub optimizer: Arc<Optimizer>,
    pub reporter: ReadinessReporter,
    pub ui: Arc<UiConfig>,
}

impl AppState {
    pub fn new(optimizer: Arc<Optimizer>) -> Self {
        let ui = Arc::new(optimizer.config().ui.clone());
        Self {
            reporter: ReadinessReporter::new(optimizer.clone()),
            optimizer,
            ui,
        }
    }
}
