//! System instruction resolution
//!
//! The instruction sent as the `system` message comes from an optional file
//! (default `prompt.md`). A missing, blank or unreadable file silently falls
//! back to [`DEFAULT_SYSTEM_PROMPT`]; the reason is kept for status reporting.

mod source;
mod templates;

pub use source::{PromptSource, PromptStatus};
pub use templates::DEFAULT_SYSTEM_PROMPT;
