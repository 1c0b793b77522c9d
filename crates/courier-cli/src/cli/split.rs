//! `courier split` -- chunk a file or stdin and print the result.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use courier_core::chunking::split;
use courier_types::chunk::Chunk;
use tokio::io::AsyncReadExt;

/// Read the input text from `file`, or from stdin when absent.
async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

pub async fn split_command(file: Option<&Path>, max: usize, json: bool) -> Result<()> {
    let text = read_input(file).await?;
    let chunks = split(Some(&text), max);
    tracing::debug!(chunks = chunks.len(), max, "split input");

    if json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    print_chunks(&chunks, max);
    Ok(())
}

fn print_chunks(chunks: &[Chunk], max: usize) {
    if chunks.is_empty() {
        eprintln!("  {}", style("No text to split.").dim());
        return;
    }

    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        let kind = if chunk.kind.is_fenced() { "code" } else { "text" };
        eprintln!(
            "{}",
            style(format!(
                "── chunk {}/{total} · {kind} · {} chars ──",
                i + 1,
                chunk.len()
            ))
            .cyan()
        );
        println!("{}", chunk.text);
    }
    eprintln!(
        "  {} {total} chunk(s), ceiling {max}",
        style("✓").green()
    );
}
