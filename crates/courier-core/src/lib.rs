//! Chunking, ordered delivery, and relay logic for Courier.
//!
//! This crate defines the "ports" (sink and worker traits) that the
//! infrastructure layer implements. It depends only on `courier-types` --
//! never on `courier-infra` or any network/IO crate.

pub mod chunking;
pub mod delivery;
pub mod relay;
