//! DeliverySink trait definition.
//!
//! A sink transmits one chunk to a chat transport and reports success or
//! failure for that chunk alone.

use std::sync::Arc;

use courier_types::error::DeliveryError;
use courier_types::message::DeliveryTarget;

/// Trait for outbound chat transports (gateway client, stdout, tests).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in courier-infra (e.g., `JsonLinesSink`).
pub trait DeliverySink: Send + Sync {
    /// Human-readable sink name used in logs.
    fn name(&self) -> &str;

    /// Deliver one chunk of text to `target`.
    ///
    /// Callers never pass text longer than the configured ceiling and await
    /// each call before the next, so implementations can assume ordering.
    fn deliver(
        &self,
        target: &DeliveryTarget,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

impl<T: DeliverySink> DeliverySink for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn deliver(&self, target: &DeliveryTarget, text: &str) -> Result<(), DeliveryError> {
        (**self).deliver(target, text).await
    }
}
