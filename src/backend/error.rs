//! Media backend errors.

use std::path::PathBuf;

/// Errors reported by a [`MediaBackend`](super::MediaBackend) command.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to start media backend '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Media backend did not open its control socket at {path} in time")]
    Connect { path: PathBuf },

    #[error("Media backend I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed reply from media backend: {0}")]
    Protocol(String),

    #[error("Media backend rejected '{command}': {message}")]
    Command { command: String, message: String },

    #[error("Media backend did not answer '{command}' in time")]
    Timeout { command: String },

    #[error("Unknown resource handle #{0}")]
    UnknownHandle(u64),

    #[error("Not supported by this media backend: {0}")]
    Unsupported(&'static str),
}

impl BackendError {
    /// Whether the backend answered that a property has no value right now
    /// (e.g. fps before the first frame is decoded).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Command { message, .. } if message == "property unavailable")
    }
}
