//! Transport controller.
//!
//! Owns the backend, the single playback session, the progress indicator
//! and the position sync task. All transport commands go through here.
//!
//! Failure policy: `play` and `snapshot` return the backend error to the
//! caller; pause, seek and rate failures are logged and otherwise ignored.

use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;

use crate::backend::{BackendError, MediaBackend};
use crate::player::indicator::{to_progress_value, ProgressIndicator};
use crate::player::playlist::{MediaEntry, Playlist};
use crate::player::snapshot::snapshot_path;
use crate::player::state::TransportState;
use crate::player::sync::PositionSync;

/// Short seek step in milliseconds.
pub const SMALL_SEEK_MS: i64 = 3_000;
/// Long seek step in milliseconds.
pub const LARGE_SEEK_MS: i64 = 10_000;
/// Assumed frame rate when the backend does not report one.
pub const DEFAULT_FPS: f64 = 25.0;
/// Speeds selectable with the number keys, in key order.
pub const PLAYBACK_RATES: [f64; 5] = [1.0, 1.2, 1.5, 2.0, 3.0];

/// The entry currently associated with the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Playlist index of the entry
    pub index: usize,
    pub entry: MediaEntry,
}

#[derive(Debug)]
pub struct TransportController<B> {
    backend: B,
    indicator: ProgressIndicator,
    sync: PositionSync,
    session: Option<Session>,
    state: TransportState,
    rate: f64,
    snapshot_dir: PathBuf,
}

impl<B: MediaBackend> TransportController<B> {
    pub fn new(backend: B, snapshot_dir: PathBuf, indicator_visible: bool) -> Self {
        Self {
            backend,
            indicator: ProgressIndicator::new(indicator_visible),
            sync: PositionSync::new(),
            session: None,
            state: TransportState::Playing,
            rate: 1.0,
            snapshot_dir,
        }
    }

    /// Play the playlist's current entry, replacing the previous session.
    pub fn play(&mut self, playlist: &Playlist, now: Instant) -> Result<(), BackendError> {
        let entry = playlist.current();
        self.backend.set_media(entry.handle())?;
        self.session = Some(Session {
            index: playlist.cursor(),
            entry: entry.clone(),
        });
        tracing::info!(index = playlist.cursor(), path = entry.path(), "now playing");

        self.indicator.set_label(playlist.label());
        self.indicator.set_value(0);
        self.state = TransportState::Playing;
        self.sync.arm(now);
        self.backend.play()
    }

    /// Flip between playing and paused, then restart the position sync.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.backend.pause() {
            Ok(()) => self.state = self.state.toggled(),
            Err(e) => tracing::warn!(error = %e, "pause failed"),
        }
        self.sync.arm(now);
    }

    /// Move by `delta_ms` from the current time. Range handling is left to
    /// the backend.
    pub fn seek_relative(&mut self, delta_ms: i64) {
        let result = self
            .backend
            .time()
            .and_then(|time| self.backend.set_time(time + delta_ms));
        if let Err(e) = result {
            tracing::warn!(delta_ms, error = %e, "relative seek failed");
        }
    }

    /// Jump to `fraction` of the total duration.
    pub fn seek_absolute(&mut self, fraction: f64) {
        if let Err(e) = self.backend.set_position(fraction) {
            tracing::warn!(fraction, error = %e, "absolute seek failed");
        }
    }

    /// Pointer seek: show the new position right away, then seek.
    pub fn scrub(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.indicator.set_value(to_progress_value(fraction));
        self.seek_absolute(fraction);
    }

    /// Select a playback speed. Whether a speed is acceptable is up to the
    /// backend.
    pub fn set_rate(&mut self, rate: f64) {
        match self.backend.set_rate(rate) {
            Ok(()) => self.rate = rate,
            Err(e) => tracing::warn!(rate, error = %e, "rate change failed"),
        }
    }

    /// Save the displayed frame of `entry` into the snapshot directory.
    pub fn snapshot(&mut self, entry: &MediaEntry) -> Result<PathBuf, BackendError> {
        let path = snapshot_path(&self.snapshot_dir, entry.path(), Utc::now());
        self.backend.take_snapshot(&path, 0, 0)?;
        tracing::info!(path = %path.display(), "snapshot saved");
        Ok(path)
    }

    /// Duration of one frame, rounded to whole milliseconds.
    pub fn frame_step_millis(&mut self) -> i64 {
        let fps = match self.backend.fps() {
            Ok(Some(fps)) if fps.is_finite() && fps > 0.0 => fps,
            Ok(_) => DEFAULT_FPS,
            Err(e) => {
                tracing::debug!(error = %e, "fps unknown, assuming {}", DEFAULT_FPS);
                DEFAULT_FPS
            }
        };
        (1000.0 / fps).round() as i64
    }

    /// Run the position sync if due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.sync.tick(&mut self.backend, &mut self.indicator, now)
    }

    pub fn toggle_indicator(&mut self) {
        self.indicator.toggle_visible();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.sync.next_deadline()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn indicator(&self) -> &ProgressIndicator {
        &self.indicator
    }

    pub fn sync(&self) -> &PositionSync {
        &self.sync
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
