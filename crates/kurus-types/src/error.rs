//! Error types for kurus.

use thiserror::Error;

/// Result type alias for kurus operations.
pub type Result<T> = std::result::Result<T, KurusError>;

/// Errors that can occur during price history retrieval and decoding.
#[derive(Error, Debug)]
pub enum KurusError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A series token could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Upstream returned no usable text.
    #[error("Empty payload from upstream (status {status}, {len} bytes)")]
    EmptyPayload {
        /// HTTP status reported by the upstream.
        status: u16,
        /// Body length in bytes.
        len: usize,
    },

    /// The payload matched neither the compact nor the pair format.
    ///
    /// The caller is expected to preserve the raw text for offline
    /// inspection instead of discarding it.
    #[error("Payload matches no recognized format")]
    UnrecognizedPayload,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
