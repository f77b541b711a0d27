//! Relaybot CLI binary.
//!
//! - Ask the pipeline a question as any channel
//! - Run `/gh` commands against GitHub
//! - Inspect the effective configuration

use clap::Parser;
use relaybot::{ObservabilityConfig, RelayConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_ask, run_gh};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    let config = match &cli.config {
        Some(path) => RelayConfig::from_file(path)?,
        None => RelayConfig::load()?,
    };

    match cli.command {
        Commands::Ask {
            text,
            channel,
            sender,
            page,
            quick_reply,
        } => {
            run_ask(&config, &text.join(" "), channel, &sender, page, quick_reply).await?;
        }

        Commands::Gh { args } => {
            run_gh(&config, &args).await?;
        }

        Commands::Config => {
            print!("{}", config.to_masked_toml()?);
        }
    }

    Ok(())
}
