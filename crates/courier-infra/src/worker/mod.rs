//! HTTP client for the response worker.

pub mod client;

pub use client::WorkerClient;
