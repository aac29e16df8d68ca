//! Readiness reporting
//!
//! A report combines the credential probe and the prompt-file state. It is
//! recomputed on every call; nothing is cached.

use crate::optimizer::{CredentialStatus, Optimizer};
use crate::prompts::PromptStatus;
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::Arc;

/// Display format of [`ReadinessReport::checked_at`]
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Overall readiness, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Readiness {
    /// Credential works; prompt is custom or a clean fallback
    Ready,
    /// Credential works but the prompt file could not be read
    PartiallyReady,
    /// Credential missing or rejected
    Blocked,
}

impl Readiness {
    /// Short machine-friendly name
    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::Ready => "ready",
            Readiness::PartiallyReady => "partially_ready",
            Readiness::Blocked => "blocked",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Readiness::Ready => "🟢 Ready to use!",
            Readiness::PartiallyReady => "🟡 Partially ready",
            Readiness::Blocked => "🔴 API key required",
        })
    }
}

/// Combine the two probes. A failed credential always blocks.
pub fn classify(api: &CredentialStatus, prompt: &PromptStatus) -> Readiness {
    match api {
        CredentialStatus::Missing | CredentialStatus::Failed(_) => Readiness::Blocked,
        CredentialStatus::Valid if prompt.is_error() => Readiness::PartiallyReady,
        CredentialStatus::Valid => Readiness::Ready,
    }
}

/// One readiness check
#[derive(Debug, Clone)]
pub struct ReadinessReport {
    /// Combined classification
    pub overall: Readiness,
    /// Credential probe result
    pub api: CredentialStatus,
    /// Prompt file state
    pub prompt: PromptStatus,
    /// Prompt file name used in the status line
    pub prompt_file: String,
    /// When the check ran (local time)
    pub checked_at: DateTime<Local>,
}

impl ReadinessReport {
    /// Prompt status rendered as a line
    pub fn prompt_line(&self) -> String {
        self.prompt.describe(&self.prompt_file)
    }

    /// `checked_at` in `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.checked_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for ReadinessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Overall Status:** {}", self.overall)?;
        writeln!(f, "**API Status:** {}", self.api)?;
        writeln!(f, "**Prompt File Status:** {}", self.prompt_line())?;
        writeln!(f, "---")?;
        write!(f, "*Status checked at: {}*", self.timestamp())
    }
}

/// Produces [`ReadinessReport`]s on demand
#[derive(Clone)]
pub struct ReadinessReporter {
    optimizer: Arc<Optimizer>,
}

impl ReadinessReporter {
    /// Reporter probing through `optimizer`
    pub fn new(optimizer: Arc<Optimizer>) -> Self {
        Self { optimizer }
    }

    /// Run both probes and classify
    pub async fn report(&self) -> ReadinessReport {
        let api = self.optimizer.check_credential().await;
        let prompts = self.optimizer.prompt_source();
        let prompt = prompts.describe_status();
        let overall = classify(&api, &prompt);

        tracing::debug!("Readiness: {}", overall.as_str());

        ReadinessReport {
            overall,
            api,
            prompt,
            prompt_file: prompts.file_name().to_string(),
            checked_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_credential_always_blocks() {
        let failures = [
            CredentialStatus::Missing,
            CredentialStatus::Failed("401".to_string()),
        ];
        let prompts = [
            PromptStatus::Found,
            PromptStatus::EmptyFallback,
            PromptStatus::MissingFallback,
            PromptStatus::ReadErrorFallback("denied".to_string()),
        ];
        for api in &failures {
            for prompt in &prompts {
                assert_eq!(classify(api, prompt), Readiness::Blocked);
            }
        }
    }

    #[test]
    fn test_valid_credential_with_clean_prompt_is_ready() {
        for prompt in [
            PromptStatus::Found,
            PromptStatus::EmptyFallback,
            PromptStatus::MissingFallback,
        ] {
            assert_eq!(
                classify(&CredentialStatus::Valid, &prompt),
                Readiness::Ready
            );
        }
    }

    #[test]
    fn test_read_error_is_partially_ready() {
        assert_eq!(
            classify(
                &CredentialStatus::Valid,
                &PromptStatus::ReadErrorFallback("denied".to_string())
            ),
            Readiness::PartiallyReady
        );
    }

    #[test]
    fn test_readiness_ordering() {
        assert!(Readiness::Ready < Readiness::PartiallyReady);
        assert!(Readiness::PartiallyReady < Readiness::Blocked);
    }

    #[test]
    fn test_report_renders_all_lines() {
        let report = ReadinessReport {
            overall: Readiness::Ready,
            api: CredentialStatus::Valid,
            prompt: PromptStatus::Found,
            prompt_file: "prompt.md".to_string(),
            checked_at: Local::now(),
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "**Overall Status:** 🟢 Ready to use!");
        assert_eq!(lines[1], "**API Status:** ✅ API key is working!");
        assert_eq!(
            lines[2],
            "**Prompt File Status:** ✅ prompt.md file found and loaded"
        );
        assert_eq!(lines[3], "---");
        assert!(lines[4].starts_with("*Status checked at: "));
    }

    #[test]
    fn test_timestamp_format() {
        let report = ReadinessReport {
            overall: Readiness::Blocked,
            api: CredentialStatus::Missing,
            prompt: PromptStatus::MissingFallback,
            prompt_file: "prompt.md".to_string(),
            checked_at: Local::now(),
        };
        let stamp = report.timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS".len());
    }
}
