//! vidcue - keyboard-driven video playlist player
//!
//! Plays a list of media files through an external mpv process, one at a
//! time, with single-key transport controls driven from the terminal.

pub mod backend;
pub mod cli;
pub mod config;
pub mod logging;
pub mod player;

pub use config::Config;
pub use player::{Player, PlayerOptions};
