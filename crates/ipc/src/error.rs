//! Protocol errors

/// Failure to read or write a protocol message
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Malformed JSON, or JSON that is not a known message
    #[error("Malformed message JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid message: {0}")]
    InvalidFormat(String),
}
