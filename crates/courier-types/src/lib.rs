//! Shared domain types for Courier.
//!
//! This crate contains the core domain types used across the Courier relay:
//! segments and chunks produced by the chunking engine, inbound messages,
//! delivery targets and reports, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chunk;
pub mod config;
pub mod delivery;
pub mod error;
pub mod message;
