//! Mouse input handling.
//!
//! A left click on the scrub bar seeks straight to that position.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::backend::MediaBackend;
use crate::player::app::Player;
use crate::player::indicator::pointer_fraction;
use crate::player::render::PlayerLayout;
use crate::player::state::InputResult;

/// Fraction of `bar` under the cell at `column`/`row`, if the cell is on it.
pub fn scrub_fraction(bar: Rect, column: u16, row: u16) -> Option<f64> {
    let on_row = row >= bar.y && row < bar.y + bar.height;
    let on_column = column >= bar.x && column < bar.x + bar.width;
    if !on_row || !on_column {
        return None;
    }
    Some(pointer_fraction(
        (column - bar.x) as f64,
        bar.width as f64,
    ))
}

/// Handle a mouse event.
pub fn handle_mouse_event<B: MediaBackend>(
    mouse: MouseEvent,
    player: &mut Player<B>,
    layout: &PlayerLayout,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if !player.transport().indicator().is_visible() {
            return InputResult::Continue;
        }
        let fraction = layout
            .bar
            .and_then(|bar| scrub_fraction(bar, mouse.column, mouse.row));
        if let Some(fraction) = fraction {
            tracing::debug!(fraction, "scrub bar click");
            player.scrub(fraction);
        }
    }

    InputResult::Continue
}
