//! In-memory sink that records every delivery attempt.
//!
//! Useful for dry runs and tests. Chunks can be scripted to fail by their
//! attempt number.

use std::collections::HashSet;
use std::sync::Mutex;

use courier_types::error::DeliveryError;
use courier_types::message::DeliveryTarget;

use super::sink::DeliverySink;

/// One recorded delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub target: DeliveryTarget,
    pub text: String,
    pub accepted: bool,
}

/// Sink that stores attempts in order instead of transmitting them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    attempts: Mutex<Vec<Recorded>>,
    fail_on: HashSet<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the attempts at these zero-based positions.
    pub fn failing_on(attempts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_on: attempts.into_iter().collect(),
        }
    }

    /// Snapshot of all attempts so far.
    pub fn attempts(&self) -> Vec<Recorded> {
        self.attempts
            .lock()
            .map(|a| a.clone())
            .unwrap_or_default()
    }

    /// Text of the accepted attempts, in order.
    pub fn delivered_texts(&self) -> Vec<String> {
        self.attempts()
            .into_iter()
            .filter(|r| r.accepted)
            .map(|r| r.text)
            .collect()
    }
}

impl DeliverySink for RecordingSink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn deliver(&self, target: &DeliveryTarget, text: &str) -> Result<(), DeliveryError> {
        let mut attempts = self
            .attempts
            .lock()
            .map_err(|_| DeliveryError::Unavailable("recording sink poisoned".to_string()))?;

        let accepted = !self.fail_on.contains(&attempts.len());
        attempts.push(Recorded {
            target: target.clone(),
            text: text.to_string(),
            accepted,
        });

        if accepted {
            Ok(())
        } else {
            Err(DeliveryError::Rejected(format!(
                "scripted failure on attempt {}",
                attempts.len() - 1
            )))
        }
    }
}
