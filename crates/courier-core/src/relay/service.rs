//! RelayService -- forwards chat messages to the worker and delivers replies.
//!
//! Every non-ignored message is forwarded so the worker can keep its memory
//! of the conversation. Only triggered messages ask for a reply; a non-empty
//! reply is chunked and delivered as replies to the original message.

use courier_types::config::{DeliveryConfig, RelayConfig};
use courier_types::delivery::DeliveryReport;
use courier_types::error::RelayError;
use courier_types::message::{ChatRequest, DeliveryTarget, InboundMessage};
use tokio::sync::mpsc;
use tracing::{Instrument, debug, error, info, info_span};

use super::generator::ResponseGenerator;
use super::trigger::{is_ignored, should_respond};
use crate::chunking::split;
use crate::delivery::{DeliverySink, deliver_chunks};

/// What happened to one inbound message.
#[derive(Debug)]
pub enum RelayOutcome {
    /// Dropped before reaching the worker (bot author).
    Ignored,
    /// Forwarded; no reply was requested.
    Forwarded,
    /// A reply was requested but the worker returned no text.
    NoResponse,
    /// The reply was chunked and delivered.
    Replied(DeliveryReport),
}

/// Counters accumulated by [`RelayService::run`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelayStats {
    pub received: usize,
    pub ignored: usize,
    pub forwarded: usize,
    pub replied: usize,
    pub worker_errors: usize,
    pub chunk_failures: usize,
}

pub struct RelayService<G, S> {
    generator: G,
    sink: S,
    relay: RelayConfig,
    max_chunk_len: usize,
}

impl<G, S> RelayService<G, S>
where
    G: ResponseGenerator,
    S: DeliverySink,
{
    pub fn new(generator: G, sink: S, relay: RelayConfig, delivery: &DeliveryConfig) -> Self {
        Self {
            generator,
            sink,
            relay,
            max_chunk_len: delivery.max_chunk_len.max(1),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Relay one message.
    ///
    /// Worker failures are returned to the caller. Delivery failures are not
    /// errors; they are recorded in the [`DeliveryReport`].
    pub async fn handle(&self, message: &InboundMessage) -> Result<RelayOutcome, RelayError> {
        if is_ignored(message, &self.relay) {
            debug!(author_id = %message.author_id, "ignoring bot-authored message");
            return Ok(RelayOutcome::Ignored);
        }

        let respond = should_respond(message, &self.relay);
        let span = info_span!(
            "relay.handle",
            message_id = %message.message_id,
            session_id = %message.session_id,
            worker = self.generator.name(),
            respond,
        );

        self.forward(message, respond).instrument(span).await
    }

    async fn forward(
        &self,
        message: &InboundMessage,
        respond: bool,
    ) -> Result<RelayOutcome, RelayError> {
        let request = ChatRequest::from_message(message, respond);
        let reply = self.generator.generate(&request).await?;

        if !respond {
            debug!("message forwarded, no reply requested");
            return Ok(RelayOutcome::Forwarded);
        }

        let Some(text) = reply.text() else {
            debug!("worker returned no response text");
            return Ok(RelayOutcome::NoResponse);
        };

        let chunks = split(Some(text), self.max_chunk_len);
        info!(chunks = chunks.len(), len = text.chars().count(), "delivering reply");

        let target = DeliveryTarget::reply_to(message);
        let report = deliver_chunks(&self.sink, &target, &chunks, self.max_chunk_len).await;
        Ok(RelayOutcome::Replied(report))
    }

    /// Relay messages from `inbox` one at a time until it closes.
    ///
    /// A failing message is logged and counted; the loop moves on.
    pub async fn run(&self, mut inbox: mpsc::Receiver<InboundMessage>) -> RelayStats {
        let mut stats = RelayStats::default();

        while let Some(message) = inbox.recv().await {
            stats.received += 1;
            match self.handle(&message).await {
                Ok(RelayOutcome::Ignored) => stats.ignored += 1,
                Ok(RelayOutcome::Forwarded | RelayOutcome::NoResponse) => stats.forwarded += 1,
                Ok(RelayOutcome::Replied(report)) => {
                    stats.forwarded += 1;
                    stats.replied += 1;
                    stats.chunk_failures += report.failures.len();
                }
                Err(e) => {
                    error!(message_id = %message.message_id, error = %e, "worker error");
                    stats.worker_errors += 1;
                }
            }
        }

        info!(?stats, "relay inbox closed");
        stats
    }
}
