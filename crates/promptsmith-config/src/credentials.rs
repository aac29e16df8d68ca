//! API key resolution
//!
//! [`resolve_api_key`] checks sources in this order:
//! 1. Environment variable (`OPENAI_API_KEY`)
//! 2. Config file value (`[openai] api_key = "..."`)
//!
//! Blank values are treated as absent. A missing key is a valid state: the
//! optimizer answers with setup instructions instead of calling the API.

use tracing::debug;

/// Environment variable holding the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Source of a resolved credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// From an environment variable
    EnvVar,
    /// From the config file
    Config,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::EnvVar => write!(f, "env"),
            CredentialSource::Config => write!(f, "config"),
        }
    }
}

/// Resolve the API key using the priority chain above.
///
/// Returns `(key, source)`, or `None` if no key is found.
pub fn resolve_api_key(config_key: Option<&str>) -> Option<(String, CredentialSource)> {
    if let Ok(value) = std::env::var(OPENAI_API_KEY_ENV) {
        let value = value.trim();
        if !value.is_empty() {
            debug!("Resolved API key from env var {}", OPENAI_API_KEY_ENV);
            return Some((value.to_string(), CredentialSource::EnvVar));
        }
    }

    if let Some(key) = config_key.map(str::trim) {
        if !key.is_empty() {
            debug!("Resolved API key from config");
            return Some((key.to_string(), CredentialSource::Config));
        }
    }

    None
}
