//! tracing subscriber setup
//!
//! The subscriber is installed before configuration loads so loader output
//! is kept, then narrowed once the `debug` toggle is known.

use crate::cli::{Cli, Commands};
use promptsmith_config::AppConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const CRATES: [&str; 5] = [
    "promptsmith_cli",
    "promptsmith_config",
    "promptsmith_core",
    "promptsmith_llm",
    "promptsmith_web",
];

/// Level before configuration is loaded: flags only
pub fn initial_level(cli: &Cli) -> LevelFilter {
    if let Some(level) = cli.log_level {
        return level.into();
    }
    if cli.verbose {
        return LevelFilter::DEBUG;
    }
    match cli.command() {
        Commands::Serve { .. } => LevelFilter::INFO,
        _ => LevelFilter::WARN,
    }
}

/// Pick the log level: `--log-level`, then `--verbose`, then the config
/// `debug` toggle for the server. One-shot commands default to warnings so
/// stdout stays clean.
pub fn resolve_level(cli: &Cli, config: &AppConfig) -> LevelFilter {
    if cli.log_level.is_none() && !cli.verbose && config.server.debug {
        if let Commands::Serve { .. } = cli.command() {
            return LevelFilter::DEBUG;
        }
    }
    initial_level(cli)
}

/// Filter directives scoping `level` to this workspace's crates
pub fn directives(level: LevelFilter) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Handle for narrowing the level after startup
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Switch to `level` unless `RUST_LOG` chose the filter
    pub fn set_level(&self, level: LevelFilter) {
        if self.from_env {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(directives(level))) {
            tracing::warn!("Failed to update log level: {}", e);
        }
    }
}

/// Install the global subscriber; `RUST_LOG` wins when set. Logs go to stderr.
pub fn init(level: LevelFilter) -> LogHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(directives(level)), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    LogHandle { handle, from_env }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_one_shot_commands_default_to_warn() {
        let cli = Cli::parse_from(["promptsmith", "status"]);
        assert_eq!(resolve_level(&cli, &AppConfig::default()), LevelFilter::WARN);
    }

    #[test]
    fn test_serve_follows_debug_toggle() {
        let cli = Cli::parse_from(["promptsmith", "serve"]);
        let mut config = AppConfig::default();
        assert_eq!(resolve_level(&cli, &config), LevelFilter::DEBUG);

        config.server.debug = false;
        assert_eq!(resolve_level(&cli, &config), LevelFilter::INFO);
    }

    #[test]
    fn test_initial_level_ignores_config() {
        let cli = Cli::parse_from(["promptsmith", "serve"]);
        assert_eq!(initial_level(&cli), LevelFilter::INFO);

        let cli = Cli::parse_from(["promptsmith", "-v", "optimize", "hi"]);
        assert_eq!(initial_level(&cli), LevelFilter::DEBUG);
    }

    #[test]
    fn test_explicit_level_wins() {
        let cli = Cli::parse_from(["promptsmith", "-v", "--log-level", "error", "serve"]);
        assert_eq!(resolve_level(&cli, &AppConfig::default()), LevelFilter::ERROR);
    }

    #[test]
    fn test_directives_cover_workspace_crates() {
        let rendered = directives(LevelFilter::INFO).to_lowercase();
        assert!(rendered.contains("promptsmith_core=info"));
        assert!(rendered.contains("promptsmith_web=info"));
    }
}
