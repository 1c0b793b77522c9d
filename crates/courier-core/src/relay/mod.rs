//! Chat relay: trigger detection, worker forwarding, and chunked replies.
//!
//! - `trigger` -- which messages are ignored, and which expect a reply
//! - `generator` -- `ResponseGenerator` trait implemented by worker clients
//! - `service` -- `RelayService` tying the worker to chunked delivery

pub mod generator;
pub mod service;
pub mod trigger;

pub use generator::ResponseGenerator;
pub use service::{RelayOutcome, RelayService, RelayStats};
