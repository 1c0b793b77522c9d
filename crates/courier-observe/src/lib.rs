//! Logging and trace export setup for Courier binaries.

pub mod exporter;
pub mod tracing_setup;

pub use exporter::JsonSpanExporter;
pub use tracing_setup::{LogFormat, init_tracing, shutdown_tracing};
