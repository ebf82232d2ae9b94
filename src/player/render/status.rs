//! Transport status line.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::player::state::TransportState;

/// Compose the status line, e.g. `paused  1.5x  | Saved /home/me/a.mp4-1.png`.
///
/// `state` is the locally tracked transport state. mpv pausing itself at the
/// end of a file (`--keep-open`) is not reflected here.
pub fn status_text(state: TransportState, rate: f64, message: Option<&str>) -> String {
    let mut text = format!("{}  {}x", state.label(), rate);
    if let Some(message) = message {
        text.push_str("  | ");
        text.push_str(message);
    }
    text
}

/// Render the status line with the given text.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let status = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
