use promptsmith_core::{Optimization, Optimizer};

/// Optimize `words` joined by spaces
pub async fn execute(optimizer: &Optimizer, words: &[String]) -> Optimization {
    let text = words.join(" ");
    optimizer.generate(&text).await
}
