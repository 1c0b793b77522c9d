//! Infrastructure layer for Courier.
//!
//! Contains implementations of the traits defined in `courier-core`:
//! the HTTP response worker client and the JSON-lines delivery sink, plus
//! the `courier.toml` loader and the line-oriented inbound message source.

pub mod config;
pub mod sink;
pub mod source;
pub mod worker;
