//! Status overlay listing the live settings and their keys.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use mystify_core::Settings;

/// Width of the help line, the widest row of the overlay.
const OVERLAY_WIDTH: u16 = 45;

/// Build the overlay lines, settings first and the key help last.
pub fn status_lines(settings: &Settings) -> Vec<Line<'static>> {
    vec![
        stat_line("fps", "i o", settings.fps.to_string()),
        stat_line("polys", "y u", settings.polys.to_string()),
        stat_line("points", "k l", settings.points.to_string()),
        stat_line("trails", "h j", settings.trails.to_string()),
        stat_line("max_v", "n m", format!("{:.2}", settings.max_velocity)),
        stat_line("incr", "v b", settings.trail_incr.to_string()),
        help_line(),
    ]
}

fn stat_line(label: &str, keys: &str, value: String) -> Line<'static> {
    Line::from(format!("{label:>6} ({keys}): {value:<7}"))
}

fn help_line() -> Line<'static> {
    let mut spans = vec![Span::raw("(")];
    let entries = [
        ("p", "pause"),
        ("s", "step"),
        ("r", "reinit"),
        ("w", "status"),
        ("q", "quit"),
    ];
    for (i, (key, action)) in entries.into_iter().enumerate() {
        if i > 0 {
            spans.push(", ".dark_gray());
        }
        spans.push(key.bold());
        spans.push(format!("={action}").dark_gray());
    }
    spans.push(Span::raw(")"));
    Line::from(spans)
}

/// Draw the overlay in the bottom-right corner of the frame.
pub fn render(frame: &mut Frame, settings: &Settings) {
    let lines = status_lines(settings);
    let area = frame.area();
    let width = OVERLAY_WIDTH.min(area.width);
    let height = (lines.len() as u16).min(area.height);
    let overlay = Rect::new(
        area.right() - width,
        area.bottom() - height,
        width,
        height,
    );

    let paragraph = Paragraph::new(lines).alignment(Alignment::Right);
    frame.render_widget(paragraph, overlay);
}
