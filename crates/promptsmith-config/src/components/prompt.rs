//! System prompt override configuration

use super::defaults::DEFAULT_PROMPT_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the optional system prompt file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Path to the override file (UTF-8 markdown)
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_PROMPT_FILE)
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { file: default_file() }
    }
}

impl PromptConfig {
    /// File name used in status lines, e.g. `prompt.md`
    pub fn display_name(&self) -> String {
        self.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}
