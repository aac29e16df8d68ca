use anyhow::Result;
use clap::Parser;
use promptsmith_cli::cli::{Cli, Commands};
use promptsmith_cli::{commands, logging};
use promptsmith_config::ConfigLoader;
use std::process;
use std::sync::Arc;
use tracing::debug;

/// Exit codes for different scenarios
mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const NOT_OPTIMIZED: i32 = 1;
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Existing environment variables win over .env entries
    let dotenv_path = dotenv::dotenv().ok();

    let log_handle = logging::init(logging::initial_level(&cli));
    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    log_handle.set_level(logging::resolve_level(&cli, &config));
    debug!("Configuration: {:?}", config);

    let optimizer = commands::build_optimizer(Arc::new(config))?;

    match cli.command() {
        Commands::Serve { .. } => commands::serve::execute(optimizer).await?,
        Commands::Optimize { text } => {
            let outcome = commands::optimize::execute(&optimizer, &text).await;
            println!("{}", outcome);
            let code = if outcome.is_success() {
                exit_codes::SUCCESS
            } else {
                exit_codes::NOT_OPTIMIZED
            };
            process::exit(code);
        }
        Commands::Status => {
            let report = commands::status::execute(optimizer).await;
            println!("{}", report);
        }
    }

    Ok(())
}
