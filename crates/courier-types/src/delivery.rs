//! Outcome of delivering a chunk sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chunk the sink failed to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkFailure {
    /// Zero-based position of the chunk in the sequence.
    pub index: usize,
    pub error: String,
}

/// Per-sequence delivery summary.
///
/// Every chunk is attempted exactly once, so `attempted` always equals the
/// sequence length and `delivered + failures.len() == attempted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// UUIDv7 correlating the log lines of one delivery run.
    pub id: Uuid,
    pub attempted: usize,
    pub delivered: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ChunkFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl DeliveryReport {
    /// An empty report stamped with the current time.
    pub fn begin() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            attempted: 0,
            delivered: 0,
            failures: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    /// True when every attempted chunk was delivered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Indices of failed chunks, in delivery order.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_empty_and_complete() {
        let report = DeliveryReport::begin();
        assert_eq!(report.attempted, 0);
        assert_eq!(report.delivered, 0);
        assert!(report.is_complete());
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn test_failures_omitted_when_empty() {
        let report = DeliveryReport::begin();
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("failures"));

        let mut report = report;
        report.failures.push(ChunkFailure {
            index: 1,
            error: "boom".to_string(),
        });
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"failures\""));
        assert_eq!(report.failed_indices(), vec![1]);
        assert!(!report.is_complete());
    }
}
