//! Delivery sinks backed by real transports.

pub mod json_lines;

pub use json_lines::JsonLinesSink;
