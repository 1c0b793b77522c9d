//! Courier CLI entry point.
//!
//! Binary name: `courier`
//!
//! Parses CLI arguments, sets up tracing, loads `courier.toml`, then
//! dispatches to the chunking or relay command.

mod cli;

use clap::Parser;
use clap_complete::generate;
use courier_observe::LogFormat;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,courier=debug",
        _ => "trace",
    };
    let format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    courier_observe::init_tracing(filter, format, cli.otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = match cli.command {
        // Shell completions don't need configuration
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "courier", &mut std::io::stdout());
            Ok(())
        }
        Commands::Split { file, max } => {
            let config = courier_infra::config::load_config(&cli.config).await;
            let max = max.unwrap_or(config.delivery.max_chunk_len);
            cli::split::split_command(file.as_deref(), max, cli.json).await
        }
        Commands::Relay {
            worker_url,
            api_key,
        } => {
            let config = courier_infra::config::load_config(&cli.config).await;
            cli::relay::relay_command(config, worker_url, api_key, cli.quiet).await
        }
    };

    courier_observe::shutdown_tracing();
    result
}
