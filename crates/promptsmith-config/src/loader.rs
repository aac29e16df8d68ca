//! Configuration file discovery and loading

use crate::components::AppConfig;
use crate::credentials::resolve_api_key;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "PROMPTSMITH_CONFIG";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "promptsmith.toml";

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`AppConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Builds an [`AppConfig`] from defaults, an optional file and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the running process.
    ///
    /// File selection: `explicit`, else `$PROMPTSMITH_CONFIG`, else
    /// `./promptsmith.toml` if it exists, else built-in defaults. An explicitly
    /// named file that does not exist is an error; the implicit one is not.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<AppConfig> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = explicit.map(Path::to_path_buf).or(from_env);

        let mut config = match path {
            Some(path) => Self::read_file(&path)?,
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::read_file(&implicit)?
                } else {
                    debug!("No config file found, using defaults");
                    AppConfig::default()
                }
            }
        };

        Self::apply_environment(&mut config);
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Parse TOML into a config without touching the environment
    pub fn from_toml_str(content: &str) -> ConfigResult<AppConfig> {
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        Ok(toml::from_str(content)?)
    }

    fn read_file(path: &Path) -> ConfigResult<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    fn apply_environment(config: &mut AppConfig) {
        config.openai.api_key = resolve_api_key(config.openai.api_key.as_deref())
            .map(|(key, source)| {
                debug!("Using API key from {}", source);
                key
            });
    }
}
