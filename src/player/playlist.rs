//! Playlist and cursor.
//!
//! The playlist is fixed at startup. The cursor only moves; starting
//! playback of the new entry is the caller's job.

use crate::backend::{MediaBackend, ResourceHandle};

/// One input path and the backend handle it was loaded as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    path: String,
    handle: ResourceHandle,
}

impl MediaEntry {
    pub fn new(path: impl Into<String>, handle: ResourceHandle) -> Self {
        Self {
            path: path.into(),
            handle,
        }
    }

    /// The path or URI exactly as given on the command line.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn handle(&self) -> ResourceHandle {
        self.handle
    }
}

/// Errors building a playlist.
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("No playable media given. Pass at least one file or URL.")]
    Empty,
}

/// Non-empty list of entries with a wrapping cursor.
#[derive(Debug, Clone)]
pub struct Playlist {
    entries: Vec<MediaEntry>,
    cursor: usize,
}

impl Playlist {
    /// Create a playlist positioned at the first entry.
    pub fn new(entries: Vec<MediaEntry>) -> Result<Self, PlaylistError> {
        if entries.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self { entries, cursor: 0 })
    }

    /// Load every path into `backend`, in order.
    ///
    /// Paths the backend refuses are logged and left out.
    pub fn load<B: MediaBackend + ?Sized>(
        paths: &[String],
        backend: &mut B,
    ) -> Result<Self, PlaylistError> {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match backend.load(path) {
                Ok(handle) => entries.push(MediaEntry::new(path.as_str(), handle)),
                Err(e) => tracing::warn!(%path, error = %e, "skipping unloadable media"),
            }
        }
        tracing::info!(entries = entries.len(), "playlist loaded");
        Self::new(entries)
    }

    /// Move to the next entry, wrapping to the first.
    pub fn advance(&mut self) -> &MediaEntry {
        self.cursor = (self.cursor + 1) % self.entries.len();
        self.current()
    }

    /// Move to the previous entry, wrapping to the last.
    pub fn retreat(&mut self) -> &MediaEntry {
        self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        self.current()
    }

    pub fn current(&self) -> &MediaEntry {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label shown above the scrub bar, e.g. `2 / 3 b.mp4`.
    pub fn label(&self) -> String {
        format!(
            "{} / {} {}",
            self.cursor + 1,
            self.entries.len(),
            self.current().path()
        )
    }
}
