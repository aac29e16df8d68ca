//! # Promptsmith Core
//!
//! The decision-making part of the prompt optimizer:
//!
//! - [`prompts`]: resolves the system instruction from an optional file, with
//!   a built-in fallback
//! - [`optimizer`]: sends the two-message chat request and turns every outcome
//!   into displayable text
//! - [`readiness`]: combines a credential probe and the prompt-file state into
//!   a tri-state summary
//!
//! Provider implementations live in `promptsmith-llm`; they plug in through
//! [`traits::ChatProvider`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use promptsmith_config::AppConfig;
//! use promptsmith_core::Optimizer;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! // No provider: every request answers with setup instructions.
//! let optimizer = Optimizer::new(Arc::new(AppConfig::default()), None);
//! let result = optimizer.generate("How do I learn Rust?").await;
//! println!("{}", result);
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod optimizer;
pub mod prompts;
pub mod readiness;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use optimizer::{extract_markdown, CredentialStatus, Optimization, Optimizer};
pub use prompts::{PromptSource, PromptStatus, DEFAULT_SYSTEM_PROMPT};
pub use readiness::{classify, Readiness, ReadinessReport, ReadinessReporter};
pub use traits::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatProvider, LlmError, LlmResult, MessageRole, TokenUsage,
};
