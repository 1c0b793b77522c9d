//! CLI command definitions for the `courier` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod relay;
pub mod split;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Split long chat replies into transport-sized chunks and relay them in order.
#[derive(Parser)]
#[command(name = "courier", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON (results on stdout, logs on stderr).
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry, one JSON line per span on stderr.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "courier.toml", env = "COURIER_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split text into chunks and print them.
    Split {
        /// File to read (stdin when omitted).
        file: Option<PathBuf>,

        /// Hard ceiling on chunk length, in characters.
        #[arg(long)]
        max: Option<usize>,
    },

    /// Relay JSON-line messages from stdin to the worker, writing replies to stdout.
    Relay {
        /// Worker base URL (overrides `worker.url`).
        #[arg(long)]
        worker_url: Option<String>,

        /// Bearer token for the worker.
        #[arg(long, env = "COURIER_WORKER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
