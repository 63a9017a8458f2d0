//! Snapshot error types.

use thiserror::Error;

/// Ways a snapshot can fail to encode, decode or restore.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot could not be written out as `format` (json or bincode)
    #[error("cannot encode snapshot as {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// The input was not a well-formed `format` snapshot
    #[error("cannot decode {format} snapshot: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    /// Written by a newer or older snapshot format
    #[error("snapshot format v{found} is not readable, expected v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Mistake timestamp and outcome history disagree
    #[error("snapshot {id} is inconsistent: {reason}")]
    Inconsistent { id: String, reason: String },
}
