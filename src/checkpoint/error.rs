//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or resuming a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or binary failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or binary failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken with a different initial state
    #[error("Checkpoint initial state '{checkpoint}' does not match configured '{configured}'")]
    InitialMismatch {
        checkpoint: String,
        configured: String,
    },

    /// The checkpoint's current state is unknown to the configuration
    #[error("Checkpoint current state '{0}' is not declared")]
    UndeclaredState(String),
}
