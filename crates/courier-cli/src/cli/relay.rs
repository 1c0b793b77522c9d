//! `courier relay` -- stdin messages in, worker replies out on stdout.

use anyhow::{Context, Result};
use console::style;
use courier_core::relay::RelayService;
use courier_infra::sink::JsonLinesSink;
use courier_infra::source::read_messages;
use courier_infra::worker::WorkerClient;
use courier_types::config::CourierConfig;
use secrecy::SecretString;
use tokio::io::BufReader;
use tokio::sync::mpsc;

/// Inbox capacity between the stdin reader and the relay loop.
const INBOX_CAPACITY: usize = 64;

pub async fn relay_command(
    mut config: CourierConfig,
    worker_url: Option<String>,
    api_key: Option<String>,
    quiet: bool,
) -> Result<()> {
    if let Some(url) = worker_url {
        config.worker.url = url;
    }
    let max = config.delivery.max_chunk_len;

    let worker = WorkerClient::new(&config.worker, api_key.map(SecretString::from))
        .context("failed to set up worker client")?;
    let sink = JsonLinesSink::stdout().with_limit(max);
    let service = RelayService::new(worker, sink, config.relay.clone(), &config.delivery);

    tracing::info!(worker = %config.worker.url, max, "relay started");

    let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
    let source = tokio::spawn(read_messages(BufReader::new(tokio::io::stdin()), tx));

    let stats = service.run(rx).await;
    let source_stats = source
        .await
        .context("stdin reader task failed")?
        .context("failed to read stdin")?;

    if !quiet {
        eprintln!();
        eprintln!(
            "  {} Relayed {} message(s): {} replied, {} ignored, {} malformed",
            style("✓").green(),
            stats.received,
            stats.replied,
            stats.ignored,
            source_stats.malformed,
        );
        if stats.worker_errors > 0 || stats.chunk_failures > 0 {
            eprintln!(
                "  {} {} worker error(s), {} undelivered chunk(s)",
                style("!").yellow(),
                stats.worker_errors,
                stats.chunk_failures,
            );
        }
    }

    Ok(())
}
