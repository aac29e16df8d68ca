//! Page text shown by the web UI

use super::defaults::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};

/// Title and description rendered in the page header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,
    /// One-line description under the title
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
        }
    }
}
