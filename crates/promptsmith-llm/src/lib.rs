//! # Promptsmith LLM
//!
//! Chat-completion providers for the prompt optimizer.
//!
//! ## Modules
//!
//! - [`chat`]: OpenAI-compatible provider and the config-driven factory
//!
//! ## Example
//!
//! ```rust,no_run
//! use promptsmith_config::ConfigLoader;
//! use promptsmith_core::Optimizer;
//! use promptsmith_llm::create_chat_provider;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(ConfigLoader::load(None)?);
//!     let provider = create_chat_provider(&config.openai)?;
//!     let optimizer = Optimizer::new(config, provider);
//!
//!     println!("{}", optimizer.generate("How to learn programming?").await);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;

pub use chat::{create_chat_provider, OpenAIChatProvider};
