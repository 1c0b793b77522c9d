//! Configuration types for Courier.
//!
//! `CourierConfig` represents the top-level `courier.toml` that controls
//! the chunk length ceiling, the response trigger, and the worker endpoint.

use serde::{Deserialize, Serialize};

/// Discord's hard limit on message content length.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 2000;

/// Top-level configuration for Courier.
///
/// Every section and field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourierConfig {
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub worker: WorkerConfig,
}

/// Settings for chunked delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Hard ceiling on chunk length, in characters.
    #[serde(default = "default_max_chunk_len")]
    pub max_chunk_len: usize,
}

fn default_max_chunk_len() -> usize {
    DEFAULT_MAX_CHUNK_LEN
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_chunk_len: default_max_chunk_len(),
        }
    }
}

/// Settings deciding which messages are forwarded and answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Messages starting with this prefix expect a reply.
    #[serde(default = "default_trigger_prefix")]
    pub trigger_prefix: String,
    /// Whether mentioning the bot expects a reply.
    #[serde(default = "default_true")]
    pub respond_to_mentions: bool,
    /// Drop messages authored by bots (including this one).
    #[serde(default = "default_true")]
    pub ignore_bots: bool,
}

fn default_trigger_prefix() -> String {
    "!ai".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            trigger_prefix: default_trigger_prefix(),
            respond_to_mentions: true,
            ignore_bots: true,
        }
    }
}

/// Response worker endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Base URL; requests go to `{url}/chat`.
    #[serde(default = "default_worker_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_worker_url() -> String {
    "https://eva.valkyrja.link".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            url: default_worker_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = CourierConfig::default();
        assert_eq!(config.delivery.max_chunk_len, 2000);
        assert_eq!(config.relay.trigger_prefix, "!ai");
        assert!(config.relay.respond_to_mentions);
        assert!(config.relay.ignore_bots);
        assert_eq!(config.worker.url, "https://eva.valkyrja.link");
        assert_eq!(config.worker.timeout_secs, 120);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: CourierConfig = toml::from_str("").unwrap();
        assert_eq!(config.delivery.max_chunk_len, DEFAULT_MAX_CHUNK_LEN);
        assert_eq!(config.relay.trigger_prefix, "!ai");
    }

    #[test]
    fn test_config_deserialize_partial_sections() {
        let toml_str = r#"
[delivery]
max_chunk_len = 500

[relay]
trigger_prefix = "?ask"

[worker]
url = "http://localhost:8787"
"#;
        let config: CourierConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.delivery.max_chunk_len, 500);
        assert_eq!(config.relay.trigger_prefix, "?ask");
        assert!(config.relay.respond_to_mentions);
        assert_eq!(config.worker.url, "http://localhost:8787");
        assert_eq!(config.worker.timeout_secs, 120);
    }
}
