//! Error types for the overlay transformer

use thiserror::Error;

/// Main error type for overlay core operations
#[derive(Error, Debug)]
pub enum OverlayError {
    /// The export JSON does not have the shape of a game-state export
    /// (missing `players`, `ambitions` or `court`, wrong value types, ...)
    #[error("Malformed game export: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// Game data could not be serialized to JSON
    #[error("Failed to serialize game data: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Broadcast message or its decompressed content is not valid JSON
    #[error("Invalid broadcast envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// Compressing or decompressing the broadcast payload failed
    #[error("Payload encoding error: {0}")]
    Encoding(#[from] std::io::Error),

    /// Broadcast payload was not valid base64
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Broadcast message did not carry compressed data
    #[error("Broadcast message is not compressed")]
    UncompressedMessage,
}

/// Result type alias for overlay core operations
pub type OverlayResult<T> = Result<T, OverlayError>;
