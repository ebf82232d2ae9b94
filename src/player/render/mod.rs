//! Rendering for the player's terminal view.
//!
//! The terminal shows key hints, a one-line transport status and, when
//! enabled, the position label and scrub bar at the bottom.

mod help;
mod progress;
mod status;

pub use help::{build_hint_spans, render_hints};
pub use progress::{build_scrub_bar_chars, render_label, render_scrub_bar};
pub use status::{render_status_line, status_text};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::backend::MediaBackend;
use crate::player::app::Player;

/// Where each part of the view goes on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerLayout {
    pub hints: Rect,
    pub status: Rect,
    /// Present only while the indicator is visible
    pub label: Option<Rect>,
    /// Present only while the indicator is visible
    pub bar: Option<Rect>,
}

/// Split `area` for the given indicator visibility.
pub fn layout(area: Rect, indicator_visible: bool) -> PlayerLayout {
    if indicator_visible {
        let [hints, status, label, bar] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        PlayerLayout {
            hints,
            status,
            label: Some(label),
            bar: Some(bar),
        }
    } else {
        let [hints, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        PlayerLayout {
            hints,
            status,
            label: None,
            bar: None,
        }
    }
}

/// Draw the whole view.
pub fn render_player<B: MediaBackend>(frame: &mut Frame, player: &Player<B>, layout: &PlayerLayout) {
    let transport = player.transport();

    render_hints(frame, layout.hints);
    render_status_line(
        frame,
        layout.status,
        &status_text(transport.state(), transport.rate(), player.message()),
    );

    // Label and bar are drawn from the same layout entry pair
    if let (Some(label), Some(bar)) = (layout.label, layout.bar) {
        render_label(frame, label, transport.indicator());
        render_scrub_bar(frame, bar, transport.indicator());
    }
}
