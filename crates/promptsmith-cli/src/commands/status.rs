use promptsmith_core::{Optimizer, ReadinessReport, ReadinessReporter};
use std::sync::Arc;

pub async fn execute(optimizer: Arc<Optimizer>) -> ReadinessReport {
    ReadinessReporter::new(optimizer).report().await
}
