//! Journal error types.

use thiserror::Error;

/// Errors that can occur while exporting or importing a session journal
#[derive(Debug, Error)]
pub enum JournalError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Journal was written by an incompatible format version
    #[error("Unsupported journal version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Journal contents contradict each other
    #[error("Journal validation failed: {0}")]
    ValidationFailed(String),
}
