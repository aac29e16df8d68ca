use clap::{Parser, Subcommand, ValueEnum};
use promptsmith_config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "promptsmith")]
#[command(about = "promptsmith - turn casual questions into structured, professional prompts")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve if not provided)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to $PROMPTSMITH_CONFIG or ./promptsmith.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// System prompt override file (overrides config file)
    #[arg(long, global = true)]
    pub prompt_file: Option<PathBuf>,

    /// Chat model (overrides config file)
    #[arg(short, long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Serve page assets from this directory instead of the embedded copy
        #[arg(long)]
        web_dir: Option<String>,
    },

    /// Optimize one question and print the result
    Optimize {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Check the API key and prompt file, then print the readiness report
    Status,
}

impl Cli {
    /// The command to run, defaulting to `serve`
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
            web_dir: None,
        })
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(path) = &self.prompt_file {
            config.prompt.file = path.clone();
        }
        if let Some(model) = &self.model {
            config.openai.model = model.clone();
        }
        if let Some(Commands::Serve {
            host,
            port,
            web_dir,
        }) = &self.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if web_dir.is_some() {
                config.server.web_dir = web_dir.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["promptsmith"]);
        assert!(matches!(cli.command(), Commands::Serve { .. }));
    }

    #[test]
    fn test_optimize_joins_words() {
        let cli = Cli::parse_from(["promptsmith", "optimize", "how", "to", "learn"]);
        assert_eq!(
            cli.command(),
            Commands::Optimize {
                text: vec!["how".into(), "to".into(), "learn".into()]
            }
        );
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "promptsmith",
            "--model",
            "gpt-4o",
            "--prompt-file",
            "custom.md",
            "serve",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.prompt.display_name(), "custom.md");
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
    }
}
