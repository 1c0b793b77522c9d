use thiserror::Error;

/// Errors reported by a delivery sink for a single chunk.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("transport rejected chunk: {0}")]
    Rejected(String),

    #[error("chunk of {len} characters exceeds transport limit of {max}")]
    TooLong { len: usize, max: usize },

    #[error("sink unavailable: {0}")]
    Unavailable(String),

    #[error("i/o error: {0}")]
    Io(String),
}

/// Errors from forwarding a message to the response worker.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("worker request failed: {0}")]
    Transport(String),

    #[error("worker returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("worker response could not be decoded: {0}")]
    Decode(String),
}
