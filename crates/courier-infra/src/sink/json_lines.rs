//! Delivery sink writing one JSON object per chunk to an async writer.
//!
//! Each delivery becomes a line `{"target": {...}, "text": "..."}`, flushed
//! before the call returns. Wrapping stdout gives a line-oriented gateway
//! that other processes can consume in order.

use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use courier_core::delivery::DeliverySink;
use courier_types::error::DeliveryError;
use courier_types::message::DeliveryTarget;

#[derive(Serialize)]
struct DeliveryLine<'a> {
    target: &'a DeliveryTarget,
    text: &'a str,
}

pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
    limit: Option<usize>,
}

impl<W> JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            limit: None,
        }
    }

    /// Reject chunks longer than `max` characters, as a chat API would.
    pub fn with_limit(mut self, max: usize) -> Self {
        self.limit = Some(max);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesSink<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> DeliverySink for JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    fn name(&self) -> &str {
        "json-lines"
    }

    async fn deliver(&self, target: &DeliveryTarget, text: &str) -> Result<(), DeliveryError> {
        if let Some(max) = self.limit {
            let len = text.chars().count();
            if len > max {
                return Err(DeliveryError::TooLong { len, max });
            }
        }

        let mut line = serde_json::to_string(&DeliveryLine { target, text })
            .map_err(|e| DeliveryError::Io(format!("failed to encode chunk: {e}")))?;
        line.push('\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| DeliveryError::Io(e.to_string()))?;
        writer
            .flush()
            .await
            .map_err(|e| DeliveryError::Io(e.to_string()))
    }
}
