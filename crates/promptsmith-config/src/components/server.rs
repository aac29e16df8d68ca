//! Web server configuration

use super::defaults::{DEFAULT_HOST, DEFAULT_PORT};
use serde::{Deserialize, Serialize};

/// HTTP server settings for the web UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request a public share link. Accepted for compatibility; not supported.
    #[serde(default)]
    pub share: bool,
    /// Verbose logging when no explicit log level is given
    #[serde(default = "default_true")]
    pub debug: bool,
    /// Serve page assets from this directory instead of the embedded copy
    pub web_dir: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            share: false,
            debug: true,
            web_dir: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for parsing into a socket address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
