//! Configuration loader for Courier.
//!
//! Reads `courier.toml` and deserializes it into [`CourierConfig`]. Falls
//! back to defaults when the file is missing or malformed.

use std::path::Path;

use courier_types::config::CourierConfig;

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`CourierConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
///
/// A `max_chunk_len` of 0 is raised to 1.
pub async fn load_config(path: &Path) -> CourierConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return CourierConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return CourierConfig::default();
        }
    };

    let mut config = match toml::from_str::<CourierConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            return CourierConfig::default();
        }
    };

    if config.delivery.max_chunk_len == 0 {
        tracing::warn!("delivery.max_chunk_len must be positive, using 1");
        config.delivery.max_chunk_len = 1;
    }
    config
}
