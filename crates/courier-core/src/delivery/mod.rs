//! Ordered, failure-isolated delivery of a chunk sequence.
//!
//! - `sink` -- `DeliverySink` trait implemented by transports
//! - `memory` -- `RecordingSink` for dry runs and tests
//!
//! Chunks go to the sink one at a time, each awaited before the next, so the
//! destination sees them in sequence order. A failed chunk is logged and
//! recorded in the [`DeliveryReport`]; delivery moves on to the next chunk
//! and never retries.

pub mod memory;
pub mod sink;

use chrono::Utc;
use courier_types::delivery::{ChunkFailure, DeliveryReport};
use courier_types::message::DeliveryTarget;
use tracing::{Instrument, debug, info_span, warn};

use crate::chunking::truncate_chars;

pub use memory::RecordingSink;
pub use sink::DeliverySink;

/// Deliver `chunks` to `target` in order.
///
/// Any chunk longer than `max` characters is truncated to `max` before it
/// reaches the sink. [`crate::chunking::split`] never produces such a chunk;
/// this only guards hand-built sequences.
pub async fn deliver_chunks<S, I>(
    sink: &S,
    target: &DeliveryTarget,
    chunks: I,
    max: usize,
) -> DeliveryReport
where
    S: DeliverySink,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = DeliveryReport::begin();
    let span = info_span!(
        "delivery.deliver",
        delivery_id = %report.id,
        sink = sink.name(),
        channel_id = target.channel_id(),
    );

    async {
        for (index, chunk) in chunks.into_iter().enumerate() {
            let text = chunk.as_ref();
            let bounded = truncate_chars(text, max);
            if bounded.len() < text.len() {
                warn!(
                    chunk_index = index,
                    len = text.chars().count(),
                    max,
                    "chunk exceeds ceiling, truncating"
                );
            }

            report.attempted += 1;
            match sink.deliver(target, bounded).await {
                Ok(()) => {
                    report.delivered += 1;
                    debug!(chunk_index = index, len = bounded.chars().count(), "chunk delivered");
                }
                Err(e) => {
                    warn!(chunk_index = index, error = %e, "failed to deliver chunk, continuing");
                    report.failures.push(ChunkFailure {
                        index,
                        error: e.to_string(),
                    });
                }
            }
        }
    }
    .instrument(span)
    .await;

    report.finished_at = Utc::now();
    report
}
