//! Input handling for the player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::{
    action_for_key, apply_action, handle_key_event, key_label, lookup, KEY_BINDINGS,
};
pub use mouse::{handle_mouse_event, scrub_fraction};

use crossterm::event::Event;
use std::time::Instant;

use crate::backend::MediaBackend;
use crate::player::app::Player;
use crate::player::render::PlayerLayout;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `player` - The player context
/// * `layout` - Screen layout of the last frame (for mouse hit testing)
/// * `now` - Time the event is processed at
pub fn handle_event<B: MediaBackend>(
    event: Event,
    player: &mut Player<B>,
    layout: &PlayerLayout,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, player, layout),
        // Layout is recomputed on the next frame
        _ => InputResult::Continue,
    }
}
