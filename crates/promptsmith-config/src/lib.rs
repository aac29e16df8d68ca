//! # Promptsmith Configuration
//!
//! Immutable, process-wide settings for the prompt optimizer.
//!
//! Configuration is assembled once at startup from three layers, later layers
//! winning:
//!
//! 1. Built-in defaults (see [`components::defaults`])
//! 2. An optional TOML file (`--config`, `PROMPTSMITH_CONFIG`, or
//!    `promptsmith.toml` in the working directory)
//! 3. The environment (`OPENAI_API_KEY`)
//!
//! The resulting [`AppConfig`] is never mutated afterwards; collaborators hold
//! it behind an `Arc`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptsmith_config::ConfigLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load(None)?;
//!     println!("model: {}", config.openai.model);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod credentials;
mod loader;

pub use components::*;
pub use credentials::{resolve_api_key, CredentialSource, OPENAI_API_KEY_ENV};
pub use loader::{ConfigError, ConfigLoader, ConfigResult, CONFIG_ENV, DEFAULT_CONFIG_FILE};
