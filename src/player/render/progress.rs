//! Position label and scrub bar.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::indicator::{to_fraction, ProgressIndicator};

/// Build the scrub bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in cells
/// * `value` - Indicator value in `[0, PROGRESS_SCALE]`
///
/// # Returns
/// A tuple of (bar_chars, filled_count). The playhead sits at
/// `filled_count` unless the bar is full.
pub fn build_scrub_bar_chars(bar_width: usize, value: u32) -> (Vec<char>, usize) {
    let filled = ((bar_width as f64 * to_fraction(value)) as usize).min(bar_width);

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '●';
    }

    (bar, filled)
}

/// Render the scrub bar across the whole of `area`.
pub fn render_scrub_bar(frame: &mut Frame, area: Rect, indicator: &ProgressIndicator) {
    let (bar, filled) = build_scrub_bar_chars(area.width as usize, indicator.value());

    let played: String = bar[..filled].iter().collect();
    let head: String = bar[filled..].iter().take(1).collect();
    let rest: String = bar[filled..].iter().skip(1).collect();

    let line = Line::from(vec![
        Span::styled(played, Style::default().fg(Color::Green)),
        Span::styled(head, Style::default().fg(Color::White)),
        Span::styled(rest, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the `index / total path` label.
pub fn render_label(frame: &mut Frame, area: Rect, indicator: &ProgressIndicator) {
    let label = Paragraph::new(indicator.label().to_string()).style(Style::default().fg(Color::Gray));
    frame.render_widget(label, area);
}
