//! Playlist player module
//!
//! Plays a list of media entries one at a time through a
//! [`MediaBackend`](crate::backend::MediaBackend), with single-key transport
//! controls and an optional position label + scrub bar.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `playlist`: MediaEntry and the wrapping playlist cursor
//! - `transport`: TransportController (session, seek, pause, rate, snapshot)
//! - `sync`: PeriodicTask and the 200 ms PositionSync
//! - `indicator`: ProgressIndicator model and value scaling
//! - `app`: `Player`, the context object tying playlist and transport together
//! - `input/`: key binding table and mouse scrubbing
//! - `render/`: terminal rendering (key hints, status line, label, scrub bar)
//! - `shell`: terminal setup and the dispatch loop
//!
//! # Usage
//!
//! ```no_run
//! use vidcue::backend::{MpvBackend, MpvOptions};
//! use vidcue::player::{shell, Player, PlayerOptions};
//! use std::path::PathBuf;
//!
//! let backend = MpvBackend::spawn(&MpvOptions::default()).unwrap();
//! let options = PlayerOptions {
//!     snapshot_dir: PathBuf::from("/tmp"),
//!     indicator_visible: true,
//! };
//! let mut player = Player::open(&["clip.mp4".to_string()], backend, options).unwrap();
//! shell::run(&mut player).unwrap();
//! ```

mod app;
pub mod indicator;
pub mod input;
pub mod playlist;
pub mod render;
pub mod shell;
pub mod snapshot;
pub mod state;
pub mod sync;
pub mod transport;

pub use app::{Player, PlayerOptions};
pub use indicator::{ProgressIndicator, PROGRESS_SCALE};
pub use playlist::{MediaEntry, Playlist, PlaylistError};
pub use state::{Action, InputResult, TransportState};
pub use sync::{PeriodicTask, PositionSync, SYNC_INTERVAL};
pub use transport::{Session, TransportController};
