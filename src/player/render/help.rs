//! Key hints shown above the status line.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::player::input::{key_label, KEY_BINDINGS};
use crate::player::state::Action;

/// Build styled spans for key hints.
///
/// Each key is highlighted with the accent color, descriptions are dimmed,
/// and entries are separated by " | ".
pub fn build_hint_spans(bindings: &[(char, Action)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", text_style));
        }
        spans.push(Span::styled(key_label(*key), key_style));
        spans.push(Span::styled(format!(": {}", action.describe()), text_style));
    }
    spans
}

/// Render every binding, wrapped to the area width.
pub fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(build_hint_spans(KEY_BINDINGS))).wrap(Wrap { trim: true });
    frame.render_widget(hints, area);
}
