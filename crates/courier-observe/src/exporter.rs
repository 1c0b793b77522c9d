//! OpenTelemetry span exporter writing one JSON object per span.
//!
//! The binary points it at stderr so span output never interleaves with
//! chunks delivered on stdout.

use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use opentelemetry::trace::SpanId;
use opentelemetry_sdk::error::{OTelSdkError, OTelSdkResult};
use opentelemetry_sdk::trace::{SpanData, SpanExporter};
use serde_json::{Map, Value, json};

/// Span exporter for any blocking writer (stderr in the binary).
#[derive(Debug)]
pub struct JsonSpanExporter<W> {
    writer: Mutex<W>,
    is_shutdown: AtomicBool,
}

impl<W> JsonSpanExporter<W>
where
    W: Write + Send + std::fmt::Debug,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> OTelSdkResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(OTelSdkError::AlreadyShutdown);
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| OTelSdkError::InternalFailure("span writer poisoned".to_string()))?;
        for span in batch {
            writeln!(writer, "{}", span_json(span))
                .map_err(|e| OTelSdkError::InternalFailure(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| OTelSdkError::InternalFailure(e.to_string()))
    }
}

impl JsonSpanExporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W> SpanExporter for JsonSpanExporter<W>
where
    W: Write + Send + std::fmt::Debug,
{
    async fn export(&self, batch: Vec<SpanData>) -> OTelSdkResult {
        self.write_batch(&batch)
    }

    fn shutdown_with_timeout(&mut self, _timeout: Duration) -> OTelSdkResult {
        self.is_shutdown.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn span_json(span: &SpanData) -> Value {
    let attributes: Map<String, Value> = span
        .attributes
        .iter()
        .map(|kv| (kv.key.to_string(), Value::String(kv.value.to_string())))
        .collect();
    let parent = (span.parent_span_id != SpanId::INVALID).then(|| span.parent_span_id.to_string());
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or_default()
        .as_micros() as u64;

    json!({
        "otel_span": span.name,
        "trace_id": span.span_context.trace_id().to_string(),
        "span_id": span.span_context.span_id().to_string(),
        "parent_span_id": parent,
        "duration_us": duration_us,
        "attributes": attributes,
    })
}
