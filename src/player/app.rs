//! Player context.
//!
//! One explicitly constructed object holding the playlist and the transport
//! (which in turn owns the backend). Everything the input router and the
//! shell do goes through a `&mut Player`.

use std::path::PathBuf;
use std::time::Instant;

use crate::backend::MediaBackend;
use crate::player::playlist::{Playlist, PlaylistError};
use crate::player::transport::TransportController;

/// Startup settings for a [`Player`].
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Where snapshots are written
    pub snapshot_dir: PathBuf,
    /// Whether label and scrub bar start out visible
    pub indicator_visible: bool,
}

#[derive(Debug)]
pub struct Player<B> {
    playlist: Playlist,
    transport: TransportController<B>,
    message: Option<String>,
}

impl<B: MediaBackend> Player<B> {
    /// Load `paths` into `backend` and build the player.
    ///
    /// Fails if no path could be loaded.
    pub fn open(paths: &[String], mut backend: B, options: PlayerOptions) -> Result<Self, PlaylistError> {
        let playlist = Playlist::load(paths, &mut backend)?;
        Ok(Self::new(playlist, backend, options))
    }

    pub fn new(playlist: Playlist, backend: B, options: PlayerOptions) -> Self {
        Self {
            playlist,
            transport: TransportController::new(
                backend,
                options.snapshot_dir,
                options.indicator_visible,
            ),
            message: None,
        }
    }

    /// Start playing the current entry.
    pub fn start(&mut self, now: Instant) {
        self.play_current(now);
    }

    /// Switch to the next entry. The cursor stays put if the switch fails.
    pub fn next(&mut self, now: Instant) {
        self.playlist.advance();
        self.play_current(now);
        if !self.session_on_cursor() {
            self.playlist.retreat();
        }
    }

    /// Switch to the previous entry. The cursor stays put if the switch fails.
    pub fn previous(&mut self, now: Instant) {
        self.playlist.retreat();
        self.play_current(now);
        if !self.session_on_cursor() {
            self.playlist.advance();
        }
    }

    fn play_current(&mut self, now: Instant) {
        match self.transport.play(&self.playlist, now) {
            Ok(()) => self.message = None,
            Err(e) => {
                let path = self.playlist.current().path();
                tracing::warn!(%path, error = %e, "playback failed");
                self.message = Some(format!("Cannot play {}: {}", path, e));
            }
        }
    }

    // A failed `play` may or may not have switched the media
    fn session_on_cursor(&self) -> bool {
        self.transport
            .session()
            .is_some_and(|session| session.index == self.playlist.cursor())
    }

    /// Save the displayed frame and report the outcome on the status line.
    pub fn snapshot(&mut self) {
        match self.transport.snapshot(self.playlist.current()) {
            Ok(path) => self.message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::warn!(error = %e, "snapshot failed");
                self.message = Some(format!("Snapshot failed: {}", e));
            }
        }
    }

    /// Pointer seek on the scrub bar.
    pub fn scrub(&mut self, fraction: f64) {
        self.transport.scrub(fraction);
    }

    /// Periodic work; call whenever the loop wakes up.
    pub fn tick(&mut self, now: Instant) {
        self.transport.tick(now);
    }

    /// When `tick` next has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.transport.next_deadline()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn transport(&self) -> &TransportController<B> {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut TransportController<B> {
        &mut self.transport
    }

    /// Last one-off status message (snapshot result, playback error).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
