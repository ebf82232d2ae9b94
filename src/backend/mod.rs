//! Media backend abstraction.
//!
//! The player never decodes or renders anything itself. Every transport
//! command goes through the [`MediaBackend`] trait, which a concrete
//! implementation maps onto a real player (see [`mpv`]).
//!
//! All commands return a `Result` so callers can decide per command whether a
//! failure is logged and ignored or surfaced to the user.

mod error;
#[cfg(test)]
pub(crate) mod fake;
#[cfg(unix)]
pub mod mpv;

pub use error::BackendError;
#[cfg(unix)]
pub use mpv::{MpvBackend, MpvOptions};

use std::path::Path;

/// Opaque reference to a resource loaded into a backend.
///
/// Only the backend that issued a handle knows what it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    /// Wrap a backend-specific id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The backend-specific id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A media player that decodes, renders and reports playback state.
///
/// Positions are normalized to `[0, 1]`, times are in milliseconds.
pub trait MediaBackend {
    /// Register a path or URI and return a handle for it.
    fn load(&mut self, path: &str) -> Result<ResourceHandle, BackendError>;

    /// Make `handle` the media of the (single) player instance,
    /// replacing whatever was associated before.
    fn set_media(&mut self, handle: ResourceHandle) -> Result<(), BackendError>;

    /// Start or resume playback.
    fn play(&mut self) -> Result<(), BackendError>;

    /// Invert the paused state.
    fn pause(&mut self) -> Result<(), BackendError>;

    /// Whether media is currently advancing (not paused, not ended).
    fn is_playing(&mut self) -> Result<bool, BackendError>;

    /// Current position as a fraction of the total duration.
    fn position(&mut self) -> Result<f64, BackendError>;

    fn set_position(&mut self, fraction: f64) -> Result<(), BackendError>;

    /// Current playback time in milliseconds.
    fn time(&mut self) -> Result<i64, BackendError>;

    /// Jump to an absolute time. Out-of-range values are clamped or
    /// ignored by the backend.
    fn set_time(&mut self, millis: i64) -> Result<(), BackendError>;

    /// Frames per second of the current media, if known.
    fn fps(&mut self) -> Result<Option<f64>, BackendError>;

    /// Set the playback speed multiplier. Range checking is up to the backend.
    fn set_rate(&mut self, rate: f64) -> Result<(), BackendError>;

    /// Write the currently displayed frame to `path`.
    ///
    /// A `width`/`height` of zero means "use the source resolution".
    fn take_snapshot(&mut self, path: &Path, width: u32, height: u32)
        -> Result<(), BackendError>;
}

impl<B: MediaBackend + ?Sized> MediaBackend for Box<B> {
    fn load(&mut self, path: &str) -> Result<ResourceHandle, BackendError> {
        (**self).load(path)
    }

    fn set_media(&mut self, handle: ResourceHandle) -> Result<(), BackendError> {
        (**self).set_media(handle)
    }

    fn play(&mut self) -> Result<(), BackendError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), BackendError> {
        (**self).pause()
    }

    fn is_playing(&mut self) -> Result<bool, BackendError> {
        (**self).is_playing()
    }

    fn position(&mut self) -> Result<f64, BackendError> {
        (**self).position()
    }

    fn set_position(&mut self, fraction: f64) -> Result<(), BackendError> {
        (**self).set_position(fraction)
    }

    fn time(&mut self) -> Result<i64, BackendError> {
        (**self).time()
    }

    fn set_time(&mut self, millis: i64) -> Result<(), BackendError> {
        (**self).set_time(millis)
    }

    fn fps(&mut self) -> Result<Option<f64>, BackendError> {
        (**self).fps()
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), BackendError> {
        (**self).set_rate(rate)
    }

    fn take_snapshot(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), BackendError> {
        (**self).take_snapshot(path, width, height)
    }
}
