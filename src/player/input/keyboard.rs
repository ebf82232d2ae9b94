//! Keyboard input handling.
//!
//! Every binding is one entry in [`KEY_BINDINGS`]; a key press is looked up
//! there and the resulting [`Action`] is applied to the player.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::backend::MediaBackend;
use crate::player::app::Player;
use crate::player::state::{Action, InputResult};
use crate::player::transport::{LARGE_SEEK_MS, PLAYBACK_RATES, SMALL_SEEK_MS};

/// Key → action table. Keys are matched case-insensitively.
pub static KEY_BINDINGS: &[(char, Action)] = &[
    ('q', Action::Quit),
    ('s', Action::Seek(LARGE_SEEK_MS)),
    ('w', Action::Seek(-LARGE_SEEK_MS)),
    ('d', Action::Seek(SMALL_SEEK_MS)),
    ('a', Action::Seek(-SMALL_SEEK_MS)),
    ('c', Action::FrameForward),
    ('x', Action::FrameBackward),
    (' ', Action::TogglePause),
    ('f', Action::Snapshot),
    ('j', Action::Next),
    ('k', Action::Previous),
    ('e', Action::ToggleIndicator),
    ('1', Action::SetRate(PLAYBACK_RATES[0])),
    ('2', Action::SetRate(PLAYBACK_RATES[1])),
    ('3', Action::SetRate(PLAYBACK_RATES[2])),
    ('4', Action::SetRate(PLAYBACK_RATES[3])),
    ('5', Action::SetRate(PLAYBACK_RATES[4])),
];

/// Look up the action bound to `symbol`.
pub fn lookup(symbol: char) -> Option<Action> {
    let symbol = symbol.to_ascii_lowercase();
    KEY_BINDINGS
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, action)| *action)
}

/// Display name of a bound key.
pub fn key_label(symbol: char) -> String {
    match symbol {
        ' ' => "space".to_string(),
        c => c.to_string(),
    }
}

/// Map a key event to an action. Releases, repeats and chords are unbound,
/// except Ctrl+C which quits (raw mode swallows SIGINT).
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => lookup(c),
        _ => None,
    }
}

/// Apply one action to the player.
pub fn apply_action<B: MediaBackend>(
    action: Action,
    player: &mut Player<B>,
    now: Instant,
) -> InputResult {
    match action {
        Action::Quit => return InputResult::Quit,
        Action::Seek(delta_ms) => player.transport_mut().seek_relative(delta_ms),
        Action::FrameForward => {
            let transport = player.transport_mut();
            let step = transport.frame_step_millis();
            transport.seek_relative(step);
        }
        Action::FrameBackward => {
            let transport = player.transport_mut();
            let step = transport.frame_step_millis();
            transport.seek_relative(-step);
        }
        Action::TogglePause => player.transport_mut().toggle_pause(now),
        Action::Snapshot => player.snapshot(),
        Action::Next => player.next(now),
        Action::Previous => player.previous(now),
        Action::ToggleIndicator => player.transport_mut().toggle_indicator(),
        Action::SetRate(rate) => player.transport_mut().set_rate(rate),
    }
    InputResult::Continue
}

/// Handle a keyboard event.
pub fn handle_key_event<B: MediaBackend>(
    key: KeyEvent,
    player: &mut Player<B>,
    now: Instant,
) -> InputResult {
    match action_for_key(&key) {
        Some(action) => {
            tracing::debug!(?action, "key action");
            apply_action(action, player, now)
        }
        None => InputResult::Continue,
    }
}
