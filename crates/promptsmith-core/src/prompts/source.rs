//! File-backed system instruction with fallback

use super::templates::DEFAULT_SYSTEM_PROMPT;
use promptsmith_config::PromptConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What happened when the override file was inspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStatus {
    /// File exists with non-blank content; that content is used
    Found,
    /// File exists but is blank; default prompt is used
    EmptyFallback,
    /// File does not exist; default prompt is used
    MissingFallback,
    /// File exists but could not be read; default prompt is used
    ReadErrorFallback(String),
}

impl PromptStatus {
    /// True only when reading the file failed
    pub fn is_error(&self) -> bool {
        matches!(self, PromptStatus::ReadErrorFallback(_))
    }

    /// Status line naming the file, e.g. `✅ prompt.md file found and loaded`
    pub fn describe(&self, file_name: &str) -> String {
        match self {
            PromptStatus::Found => format!("✅ {file_name} file found and loaded"),
            PromptStatus::EmptyFallback => {
                format!("⚠️ {file_name} file is empty, using default prompt")
            }
            PromptStatus::MissingFallback => {
                format!("⚠️ {file_name} not found, using default prompt")
            }
            PromptStatus::ReadErrorFallback(reason) => {
                format!("⚠️ Error reading {file_name}: {reason}")
            }
        }
    }
}

/// Resolves the system instruction, re-reading the file on every call
#[derive(Debug, Clone)]
pub struct PromptSource {
    path: PathBuf,
    file_name: String,
}

impl PromptSource {
    /// Source backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let config = PromptConfig { file: path.into() };
        Self::from_config(&config)
    }

    /// Source backed by the configured prompt file
    pub fn from_config(config: &PromptConfig) -> Self {
        Self {
            path: config.file.clone(),
            file_name: config.display_name(),
        }
    }

    /// Path of the override file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown in status lines
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The instruction to send: trimmed file content, or the built-in default
    pub fn resolve(&self) -> String {
        match self.inspect() {
            (PromptStatus::Found, Some(content)) => {
                debug!("Using system prompt from {}", self.path.display());
                content
            }
            (PromptStatus::ReadErrorFallback(reason), _) => {
                warn!("Error loading {}: {}", self.path.display(), reason);
                DEFAULT_SYSTEM_PROMPT.to_string()
            }
            _ => DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Inspect the override file without resolving
    pub fn describe_status(&self) -> PromptStatus {
        self.inspect().0
    }

    /// [`Self::describe_status`] rendered as a status line
    pub fn status_line(&self) -> String {
        self.describe_status().describe(&self.file_name)
    }

    fn inspect(&self) -> (PromptStatus, Option<String>) {
        if !self.path.exists() {
            return (PromptStatus::MissingFallback, None);
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    (PromptStatus::EmptyFallback, None)
                } else {
                    (PromptStatus::Found, Some(trimmed.to_string()))
                }
            }
            Err(e) => (PromptStatus::ReadErrorFallback(e.to_string()), None),
        }
    }
}
