//! ResponseGenerator trait definition.
//!
//! The response worker records every relayed message and, when asked,
//! returns the text to send back.

use std::sync::Arc;

use courier_types::error::RelayError;
use courier_types::message::{ChatReply, ChatRequest};

/// Trait for response backends (HTTP worker, scripted tests).
///
/// Implementations live in courier-infra (e.g., `WorkerClient`).
pub trait ResponseGenerator: Send + Sync {
    /// Human-readable backend name used in logs.
    fn name(&self) -> &str;

    /// Forward one message and return the worker's reply.
    fn generate(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatReply, RelayError>> + Send;
}

impl<T: ResponseGenerator> ResponseGenerator for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(&self, request: &ChatRequest) -> Result<ChatReply, RelayError> {
        (**self).generate(request).await
    }
}
